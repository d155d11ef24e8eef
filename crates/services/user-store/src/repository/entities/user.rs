//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use domain::{Entity as _, User};

use crate::repository::Table;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Indexed but not unique; lookups must tolerate duplicates
    pub email: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            password: model.password,
        }
    }
}

impl Table for Entity {
    type Domain = User;

    fn id_column() -> Self::Column {
        Column::Id
    }

    fn to_active_model(user: &User) -> ActiveModel {
        ActiveModel {
            id: if user.is_transient() { NotSet } else { Set(user.id) },
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
        }
    }
}
