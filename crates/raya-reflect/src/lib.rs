//! Raya Reflect - parameter-type extraction
//!
//! Reads the declared types out of a method's resolved parameter list.
//!
//! ```ignore
//! use raya_reflect::{ParameterInfo, ParameterTypes, TypeInfo};
//!
//! let params = [
//!     ParameterInfo::new("a", TypeInfo::primitive("number"), 0),
//!     ParameterInfo::new("b", TypeInfo::primitive("string"), 1),
//! ];
//!
//! // Allocating
//! let types = params.to_types();
//!
//! // Into a reused buffer
//! let mut buf = vec![TypeInfo::primitive("null"); 8];
//! params.fill_types(&mut buf)?;
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod introspection;
pub mod params;

pub use error::{ReflectError, ReflectResult};
pub use introspection::{ConstructorInfo, MethodInfo, ParameterInfo, TypeInfo, TypeKind};
pub use params::{fill_types, to_types, ParameterMetadata, ParameterTypes};
