use sea_orm::entity::prelude::*;

/// Progress checkpoint for one migration directory.
///
/// `last_run` holds the highest file index that has been applied and committed in
/// `path`. It is only ever written in the same transaction as the file it refers to.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "migration_dirs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub path: String,
    pub last_run: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
