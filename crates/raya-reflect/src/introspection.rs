//! Reflection records for methods and their parameters
//!
//! These are the already-resolved records the runtime hands out when a class
//! is compiled with `--emit-reflection`. Parameter lists are read through
//! [`ParameterTypes`], never walked any further.

use serde::{Deserialize, Serialize};

use crate::error::ReflectResult;
use crate::params::{ParameterMetadata, ParameterTypes};

/// Runtime type information
#[derive(Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Type kind
    pub kind: TypeKind,
    /// Type name
    pub name: String,
    /// Class ID (for class types)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<usize>,
    /// Element type (for arrays)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_type: Option<Box<TypeInfo>>,
    /// Union member types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub union_members: Option<Vec<TypeInfo>>,
    /// Type arguments (for generics)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Vec<TypeInfo>>,
}

/// Type kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    /// Primitive types (number, boolean, null, string)
    Primitive,
    /// Class types
    Class,
    /// Interface types
    Interface,
    /// Union types
    Union,
    /// Function types
    Function,
    /// Array types
    Array,
    /// Generic types
    Generic,
}

// Hand-written so `clone_from` reuses the name and nested buffers when
// `fill_types` overwrites a slot.
impl Clone for TypeInfo {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            name: self.name.clone(),
            class_id: self.class_id,
            element_type: self.element_type.clone(),
            union_members: self.union_members.clone(),
            type_arguments: self.type_arguments.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.kind = source.kind;
        self.name.clone_from(&source.name);
        self.class_id = source.class_id;
        self.element_type.clone_from(&source.element_type);
        self.union_members.clone_from(&source.union_members);
        self.type_arguments.clone_from(&source.type_arguments);
    }
}

impl TypeInfo {
    fn bare(kind: TypeKind, name: String) -> Self {
        Self {
            kind,
            name,
            class_id: None,
            element_type: None,
            union_members: None,
            type_arguments: None,
        }
    }

    /// Create a primitive type info
    pub fn primitive(name: &str) -> Self {
        Self::bare(TypeKind::Primitive, name.to_string())
    }

    /// Create a class type info
    pub fn class(name: &str, class_id: usize) -> Self {
        Self {
            class_id: Some(class_id),
            ..Self::bare(TypeKind::Class, name.to_string())
        }
    }

    /// Create an interface type info
    pub fn interface(name: &str) -> Self {
        Self::bare(TypeKind::Interface, name.to_string())
    }

    /// Create a function type info, named `(A, B) => R`
    pub fn function(params: &[TypeInfo], return_type: &TypeInfo) -> Self {
        let params = params
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self::bare(
            TypeKind::Function,
            format!("({}) => {}", params, return_type.name),
        )
    }

    /// Create an array type info
    pub fn array(element_type: TypeInfo) -> Self {
        let name = format!("{}[]", element_type.name);
        Self {
            element_type: Some(Box::new(element_type)),
            ..Self::bare(TypeKind::Array, name)
        }
    }

    /// Create a union type info, named `A | B | ...`
    pub fn union(members: Vec<TypeInfo>) -> Self {
        let name = members
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join(" | ");
        Self {
            union_members: Some(members),
            ..Self::bare(TypeKind::Union, name)
        }
    }

    /// Create an instantiated generic type info, named `Name<A, B>`
    pub fn generic(name: &str, type_arguments: Vec<TypeInfo>) -> Self {
        let args = type_arguments
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            type_arguments: Some(type_arguments),
            ..Self::bare(TypeKind::Generic, format!("{}<{}>", name, args))
        }
    }
}

/// Parameter information for reflection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Parameter name
    pub name: String,
    /// Parameter type info
    pub type_info: TypeInfo,
    /// Parameter index
    pub index: usize,
    /// Whether the parameter is optional
    pub is_optional: bool,
}

impl ParameterInfo {
    /// Create a required parameter
    pub fn new(name: &str, type_info: TypeInfo, index: usize) -> Self {
        Self {
            name: name.to_string(),
            type_info,
            index,
            is_optional: false,
        }
    }

    /// Create an optional parameter (`name?: T`)
    pub fn optional(name: &str, type_info: TypeInfo, index: usize) -> Self {
        Self {
            is_optional: true,
            ..Self::new(name, type_info, index)
        }
    }
}

impl ParameterMetadata for ParameterInfo {
    type Type = TypeInfo;

    #[inline]
    fn parameter_type(&self) -> &TypeInfo {
        &self.type_info
    }
}

/// Method information for reflection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    /// Method name
    pub name: String,
    /// Return type info
    pub return_type: TypeInfo,
    /// Parameter infos
    pub parameters: Vec<ParameterInfo>,
    /// Declaring class ID
    pub declaring_class_id: usize,
    /// Method index in vtable
    pub method_index: usize,
    /// Whether the method is static
    pub is_static: bool,
    /// Whether the method is async
    pub is_async: bool,
}

impl MethodInfo {
    /// Declared parameter types, in declaration order
    pub fn parameter_types(&self) -> Vec<TypeInfo> {
        self.parameters.to_types()
    }

    /// Write the declared parameter types into `destination`
    ///
    /// Fails without touching `destination` when it has fewer slots than the
    /// method has parameters.
    pub fn fill_parameter_types(&self, destination: &mut [TypeInfo]) -> ReflectResult<()> {
        self.parameters.fill_types(destination)
    }
}

/// Constructor information for reflection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorInfo {
    /// Parameter infos
    pub parameters: Vec<ParameterInfo>,
    /// Declaring class ID
    pub declaring_class_id: usize,
    /// Constructor function ID
    pub function_id: usize,
}

impl ConstructorInfo {
    /// Declared parameter types, in declaration order
    pub fn parameter_types(&self) -> Vec<TypeInfo> {
        self.parameters.to_types()
    }

    /// Write the declared parameter types into `destination`
    pub fn fill_parameter_types(&self, destination: &mut [TypeInfo]) -> ReflectResult<()> {
        self.parameters.fill_types(destination)
    }
}
