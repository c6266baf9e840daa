use crate::{
    checkpoint::MigrationDirRepository,
    error::MigrationError,
    runner::{directory_key, Migrator},
    scan::{parse_file_name, scan_directory, DuplicateIndex},
};
use sea_orm::{ConnectionTrait, DbErr};
use test_utils::{
    builder::TestBuilder,
    factory::MigrationDirFactory,
    fixture::{applied, MigrationTree},
};

mod scan_directory;
