//! Shared test material: a small universe with a framework reference layer
//! and a game assembly carrying container candidates

use husk_universe::{FieldInfo, Module, PropertyInfo, TypeInfo, TypeRef, Universe};

pub(crate) fn framework() -> Module {
    Module::new("framework")
        .with_type(TypeInfo::structure("System.Int32").with_keyword("int"))
        .with_type(TypeInfo::structure("System.Single").with_keyword("float"))
        .with_type(TypeInfo::class("System.String").with_keyword("string"))
        .with_type(TypeInfo::class("System.Collections.Generic.List`1"))
        .with_type(TypeInfo::structure("UnityEngine.Vector2"))
}

pub(crate) fn player() -> TypeInfo {
    TypeInfo::class("Game.Player")
        .with_field(FieldInfo::new(
            "Position",
            TypeRef::named("UnityEngine.Vector2"),
        ))
        .with_field(FieldInfo::new("Health", TypeRef::named("System.Int32")))
        .with_field({
            let mut field = FieldInfo::new("Counter", TypeRef::named("System.Int32"));
            field.is_static = true;
            field
        })
        .with_field({
            let mut field = FieldInfo::new("Version", TypeRef::named("System.Int32"));
            field.is_constant = true;
            field
        })
        .with_field({
            let mut field = FieldInfo::new("m_state", TypeRef::named("System.Int32"));
            field.is_public = false;
            field
        })
        .with_property(PropertyInfo::new("Name", TypeRef::named("System.String")))
        .with_property(PropertyInfo::get_only("Id", TypeRef::named("System.Int32")))
}

pub(crate) fn enemy() -> TypeInfo {
    TypeInfo::class("Game.Enemy")
        .with_field(FieldInfo::new("Brain", TypeRef::named("Game.MissingBrain")))
        .with_field(FieldInfo::new("Health", TypeRef::named("System.Int32")))
}

pub(crate) fn game_universe() -> Universe {
    let assembly = Module::new("game")
        .with_type(player())
        .with_type(enemy());
    Universe::new(assembly).with_reference(framework())
}
