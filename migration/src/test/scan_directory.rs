use super::*;

/// Tests that only well-formed migration files are collected, keyed by index.
///
/// Expected: Ok with indices 1, 2 and 5 and non-migration files ignored
#[tokio::test]
async fn collects_files_by_index() -> Result<(), std::io::Error> {
    let tree = MigrationTree::new()?;
    tree.file("0005-c.sql", "")?;
    tree.file("0001-a.sql", "")?;
    tree.file("0002-b.sql", "")?;
    tree.file("abc.sql", "")?;
    tree.file("1.sql", "")?;
    tree.file("01-bad name.sql", "")?;
    tree.file("README.md", "")?;

    let listing = scan_directory(tree.path(), true, DuplicateIndex::Replace)
        .await
        .unwrap();

    let indices: Vec<i32> = listing.files.keys().copied().collect();
    assert_eq!(indices, vec![1, 2, 5]);
    assert_eq!(listing.files[&1], tree.path().join("0001-a.sql"));
    assert!(listing.subdirs.is_empty());

    Ok(())
}

/// Tests that subdirectories are only collected when requested.
///
/// Expected: subdirectories in name order when requested, none otherwise
#[tokio::test]
async fn collects_subdirs_only_when_requested() -> Result<(), std::io::Error> {
    let tree = MigrationTree::new()?;
    tree.subdir("zeta")?;
    tree.subdir("alpha")?;
    tree.file("0001-a.sql", "")?;

    let with_subdirs = scan_directory(tree.path(), true, DuplicateIndex::Replace)
        .await
        .unwrap();
    assert_eq!(
        with_subdirs.subdirs,
        vec![tree.path().join("alpha"), tree.path().join("zeta")]
    );

    let without_subdirs = scan_directory(tree.path(), false, DuplicateIndex::Replace)
        .await
        .unwrap();
    assert!(without_subdirs.subdirs.is_empty());
    assert_eq!(without_subdirs.files.len(), 1);

    Ok(())
}

/// Tests that a directory named like a migration file is not treated as one.
///
/// Expected: Ok with no files and the directory collected as a subdirectory
#[tokio::test]
async fn directory_with_migration_name_is_not_a_file() -> Result<(), std::io::Error> {
    let tree = MigrationTree::new()?;
    tree.subdir("0001-looks_like_a_file.sql")?;

    let listing = scan_directory(tree.path(), true, DuplicateIndex::Replace)
        .await
        .unwrap();

    assert!(listing.files.is_empty());
    assert_eq!(listing.subdirs.len(), 1);

    Ok(())
}

/// Tests the default duplicate policy.
///
/// `001-second.sql` sorts before `1-first.sql`, so the latter is listed last and wins.
///
/// Expected: Ok with index 1 mapped to `1-first.sql`
#[tokio::test]
async fn duplicate_index_last_listed_wins() -> Result<(), std::io::Error> {
    let tree = MigrationTree::new()?;
    tree.file("1-first.sql", "")?;
    tree.file("001-second.sql", "")?;

    let listing = scan_directory(tree.path(), false, DuplicateIndex::Replace)
        .await
        .unwrap();

    assert_eq!(listing.files.len(), 1);
    assert_eq!(listing.files[&1], tree.path().join("1-first.sql"));

    Ok(())
}

/// Tests that duplicates are a hard error under the strict policy.
///
/// Expected: Err(DuplicateIndex) naming both files
#[tokio::test]
async fn duplicate_index_rejected_when_strict() -> Result<(), std::io::Error> {
    let tree = MigrationTree::new()?;
    tree.file("1-first.sql", "")?;
    tree.file("001-second.sql", "")?;

    let result = scan_directory(tree.path(), false, DuplicateIndex::Reject).await;

    match result {
        Err(MigrationError::DuplicateIndex {
            index,
            first,
            second,
            ..
        }) => {
            assert_eq!(index, 1);
            assert_eq!(first, tree.path().join("001-second.sql"));
            assert_eq!(second, tree.path().join("1-first.sql"));
        }
        other => panic!("Expected DuplicateIndex error, got {:?}", other),
    }

    Ok(())
}

/// Tests scanning a directory that does not exist.
///
/// Expected: Err(ReadDir) for the missing path
#[tokio::test]
async fn missing_directory_fails() -> Result<(), std::io::Error> {
    let tree = MigrationTree::new()?;
    let missing = tree.path().join("missing");

    let result = scan_directory(&missing, true, DuplicateIndex::Replace).await;

    assert!(matches!(result, Err(MigrationError::ReadDir { ref path, .. }) if *path == missing));

    Ok(())
}
