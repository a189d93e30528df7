use std::sync::Arc;

use raya_reflect::{
    fill_types, to_types, ConstructorInfo, MethodInfo, ParameterInfo, ParameterMetadata,
    ParameterTypes, ReflectError, TypeInfo,
};

fn int32() -> TypeInfo {
    TypeInfo::primitive("Int32")
}

fn string() -> TypeInfo {
    TypeInfo::primitive("String")
}

fn two_params() -> Vec<ParameterInfo> {
    vec![
        ParameterInfo::new("a", int32(), 0),
        ParameterInfo::new("b", string(), 1),
    ]
}

#[test]
fn test_to_types_two_params() {
    assert_eq!(to_types(&two_params()), vec![int32(), string()]);
}

#[test]
fn test_fill_types_sized_to_fit() {
    let mut dest = vec![TypeInfo::primitive("void"); 2];
    fill_types(&two_params(), &mut dest).unwrap();
    assert_eq!(dest, vec![int32(), string()]);
}

#[test]
fn test_fill_types_one_slot_short() {
    let mut dest = vec![TypeInfo::primitive("void")];
    let err = two_params().fill_types(&mut dest).unwrap_err();
    assert!(
        matches!(err, ReflectError::InvalidArgument { argument: "destination", .. }),
        "unexpected error: {err}"
    );
    assert_eq!(dest, vec![TypeInfo::primitive("void")]);
}

#[test]
fn test_buffer_reused_across_methods() {
    let methods = [
        MethodInfo {
            name: "add".to_string(),
            return_type: TypeInfo::primitive("number"),
            parameters: vec![
                ParameterInfo::new("x", TypeInfo::primitive("number"), 0),
                ParameterInfo::new("y", TypeInfo::primitive("number"), 1),
                ParameterInfo::optional("scale", TypeInfo::primitive("number"), 2),
            ],
            declaring_class_id: 1,
            method_index: 0,
            is_static: true,
            is_async: false,
        },
        MethodInfo {
            name: "load".to_string(),
            return_type: TypeInfo::generic("Task", vec![TypeInfo::class("User", 4)]),
            parameters: vec![ParameterInfo::new(
                "ids",
                TypeInfo::array(TypeInfo::primitive("string")),
                0,
            )],
            declaring_class_id: 1,
            method_index: 1,
            is_static: false,
            is_async: true,
        },
    ];

    let sentinel = TypeInfo::primitive("null");
    let mut buf = vec![sentinel.clone(); 4];

    methods[0].fill_parameter_types(&mut buf).unwrap();
    assert_eq!(&buf[..3], methods[0].parameter_types().as_slice());
    assert_eq!(buf[3], sentinel);

    methods[1].fill_parameter_types(&mut buf).unwrap();
    assert_eq!(buf[0].name, "string[]");
    // Slots beyond the second method's arity keep the first method's types
    assert_eq!(buf[1], TypeInfo::primitive("number"));
    assert_eq!(buf[3], sentinel);
}

#[test]
fn test_constructor_parameter_types() {
    let ctor = ConstructorInfo {
        parameters: vec![
            ParameterInfo::new("name", string(), 0),
            ParameterInfo::new(
                "tag",
                TypeInfo::union(vec![string(), TypeInfo::primitive("null")]),
                1,
            ),
        ],
        declaring_class_id: 2,
        function_id: 11,
    };
    let types = ctor.parameter_types();
    assert_eq!(types.len(), 2);
    assert_eq!(types[1].name, "String | null");
}

#[test]
fn test_shared_parameter_records() {
    let shared: Vec<Arc<ParameterInfo>> = two_params().into_iter().map(Arc::new).collect();
    let refs: Vec<&ParameterInfo> = shared.iter().map(|p| p.as_ref()).collect();
    assert_eq!(shared.to_types(), refs.to_types());
    assert_eq!(refs[1].parameter_type(), &string());
}

/// Host-side metadata that is not a `ParameterInfo`
struct HostParam {
    slot: u16,
}

impl ParameterMetadata for HostParam {
    type Type = u16;

    fn parameter_type(&self) -> &u16 {
        &self.slot
    }
}

#[test]
fn test_custom_host_metadata() {
    let params = [HostParam { slot: 7 }, HostParam { slot: 3 }, HostParam { slot: 9 }];
    assert_eq!(params.to_types(), vec![7, 3, 9]);

    let mut dest = [0u16; 5];
    params.fill_types(&mut dest).unwrap();
    assert_eq!(dest, [7, 3, 9, 0, 0]);

    let mut short = [1u16; 2];
    assert!(params.fill_types(&mut short).is_err());
    assert_eq!(short, [1, 1]);
}

#[test]
fn test_parameter_info_serialized_shape() {
    let param = ParameterInfo::optional("id", TypeInfo::class("User", 4), 0);
    let json = serde_json::to_value(&param).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "id",
            "type_info": { "kind": "Class", "name": "User", "class_id": 4 },
            "index": 0,
            "is_optional": true
        })
    );

    let back: ParameterInfo = serde_json::from_value(json).unwrap();
    assert_eq!(back, param);
}
