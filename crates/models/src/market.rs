//! The `market` entity: one classified ad per row, plus the validation that
//! gates what may be inserted.

use sea_orm::{entity::prelude::*, ActiveValue::NotSet, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::errors::ModelError;

pub const TITLE_MAX_CHARS: usize = 32;
pub const OWNER_MAX_CHARS: usize = 255;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "market")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub creation_time: DateTimeWithTimeZone,
    pub owner: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A creation payload that passed validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAd {
    pub title: String,
    pub description: String,
    pub owner: String,
}

impl NewAd {
    /// `id` and `creation_time` stay unset so the store assigns them.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            title: Set(self.title),
            description: Set(self.description),
            creation_time: NotSet,
            owner: Set(self.owner),
        }
    }
}

/// One field failing one rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Violation {
    fn new(field: &str, msg: &str, kind: &str) -> Self {
        Self { loc: vec![field.to_string()], msg: msg.to_string(), kind: kind.to_string() }
    }

    fn missing(field: &str) -> Self {
        Self::new(field, "field required", "value_error.missing")
    }

    fn null_value(field: &str) -> Self {
        Self::new(field, "none is not an allowed value", "type_error.none.not_allowed")
    }

    fn not_a_string(field: &str) -> Self {
        Self::new(field, "str type expected", "type_error.str")
    }

    pub fn field(&self) -> Option<&str> {
        self.loc.first().map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{} validation error(s)", .0.len())]
pub struct ValidationError(pub Vec<Violation>);

impl ValidationError {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.0
    }
}

fn required_str(obj: &serde_json::Map<String, Value>, field: &str, errors: &mut Vec<Violation>) -> Option<String> {
    match obj.get(field) {
        None => {
            errors.push(Violation::missing(field));
            None
        }
        Some(Value::Null) => {
            errors.push(Violation::null_value(field));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(Violation::not_a_string(field));
            None
        }
    }
}

pub fn validate_title(title: &str) -> Result<(), Violation> {
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(Violation::new(
            "title",
            &format!("Title must be at most {TITLE_MAX_CHARS} chars"),
            "value_error",
        ));
    }
    Ok(())
}

/// Check a raw creation payload. Every violation is reported, in field
/// order; unknown keys are ignored.
pub fn validate_new_ad(payload: &Value) -> Result<NewAd, ValidationError> {
    let Some(obj) = payload.as_object() else {
        return Err(ValidationError(vec![Violation::new(
            "__root__",
            "value is not a valid dict",
            "type_error.dict",
        )]));
    };

    let mut errors = Vec::new();
    let title = required_str(obj, "title", &mut errors);
    if let Some(t) = &title {
        if let Err(v) = validate_title(t) {
            errors.push(v);
        }
    }
    let description = required_str(obj, "description", &mut errors);
    let owner = required_str(obj, "owner", &mut errors);

    match (title, description, owner) {
        (Some(title), Some(description), Some(owner)) if errors.is_empty() => {
            Ok(NewAd { title, description, owner })
        }
        _ => Err(ValidationError(errors)),
    }
}

/// Insert on the given connection or transaction; the returned model carries
/// the store-assigned `id` and `creation_time`.
pub async fn insert<C: ConnectionTrait>(conn: &C, ad: NewAd) -> Result<Model, ModelError> {
    ad.into_active_model().insert(conn).await.map_err(ModelError::from_write)
}

pub async fn find<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(conn).await.map_err(ModelError::from_db)
}

/// Returns true if a row was removed.
pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(conn).await.map_err(ModelError::from_db)?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_valid_payload() {
        let ad = validate_new_ad(&json!({
            "title": "Garage sale",
            "description": "Garage for sale in excellent condition",
            "owner": "Alex"
        }))
        .unwrap();
        assert_eq!(ad.title, "Garage sale");
        assert_eq!(ad.description, "Garage for sale in excellent condition");
        assert_eq!(ad.owner, "Alex");
    }

    #[test]
    fn title_of_exactly_32_chars_is_allowed() {
        let title = "a".repeat(32);
        let ad = validate_new_ad(&json!({"title": title, "description": "d", "owner": "o"})).unwrap();
        assert_eq!(ad.title.len(), 32);
    }

    #[test]
    fn title_of_33_chars_is_rejected() {
        let err = validate_new_ad(&json!({"title": "a".repeat(33), "description": "d", "owner": "o"})).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].field(), Some("title"));
        assert_eq!(err.violations()[0].kind, "value_error");
    }

    #[test]
    fn title_length_counts_chars_not_bytes() {
        // 32 two-byte characters
        let title = "é".repeat(32);
        assert!(validate_title(&title).is_ok());
        assert!(validate_title(&"é".repeat(33)).is_err());
    }

    #[test]
    fn reports_all_missing_fields_in_order() {
        let err = validate_new_ad(&json!({})).unwrap_err();
        let fields: Vec<_> = err.violations().iter().filter_map(|v| v.field()).collect();
        assert_eq!(fields, vec!["title", "description", "owner"]);
        assert!(err.violations().iter().all(|v| v.kind == "value_error.missing"));
    }

    #[test]
    fn null_is_not_an_allowed_value() {
        let err = validate_new_ad(&json!({"title": null, "description": "d", "owner": "o"})).unwrap_err();
        assert_eq!(err.violations(), &[Violation::null_value("title")]);
        assert_eq!(err.violations()[0].kind, "type_error.none.not_allowed");
        assert_eq!(err.violations()[0].msg, "none is not an allowed value");
    }

    #[test]
    fn non_string_fields_are_type_errors() {
        let err = validate_new_ad(&json!({"title": 5, "description": ["x"], "owner": "o"})).unwrap_err();
        assert_eq!(err.violations(), &[Violation::not_a_string("title"), Violation::not_a_string("description")]);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = validate_new_ad(&json!(["title"])).unwrap_err();
        assert_eq!(err.violations()[0].field(), Some("__root__"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let ad = validate_new_ad(&json!({"title": "t", "description": "d", "owner": "o", "price": 10})).unwrap();
        assert_eq!(ad, NewAd { title: "t".into(), description: "d".into(), owner: "o".into() });
    }

    #[test]
    fn violation_serializes_with_type_key() {
        let v = serde_json::to_value(Violation::missing("owner")).unwrap();
        assert_eq!(v, json!({"loc": ["owner"], "msg": "field required", "type": "value_error.missing"}));
    }

    #[test]
    fn active_model_leaves_store_fields_unset() {
        let am = NewAd { title: "t".into(), description: "d".into(), owner: "o".into() }.into_active_model();
        assert!(am.id.is_not_set());
        assert!(am.creation_time.is_not_set());
        assert_eq!(am.title.as_ref(), "t");
    }
}
