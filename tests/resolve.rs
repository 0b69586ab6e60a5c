//! End-to-end resolution through the library API.

use std::io::Read;

use meme::catalog::{Catalog, EmbeddedCatalog, WATERMARK_DECAL};
use meme::registry::AssetRegistry;
use meme::source::{HomeDir, Resolver, SourceKind};
use meme::{ErrorClass, MemeError, ResolverConfig};

mod common;

#[test]
fn every_bundled_asset_matches_catalog_bytes() {
    let catalog = EmbeddedCatalog::bundled();
    let registry = AssetRegistry::build(&catalog).expect("registry");
    let resolver = Resolver::new(&catalog, &registry, ResolverConfig::default());

    assert!(!registry.is_empty());
    for (id, path) in registry.iter() {
        let stream = resolver.fetch_asset(id).expect("fetch asset");
        let stored = catalog.read_entry(path).expect("read entry");

        assert!(!stream.is_empty(), "asset '{id}' is empty");
        assert_eq!(stream.as_bytes(), stored.as_slice());
    }
}

#[test]
fn bundled_assets_are_png() {
    let catalog = EmbeddedCatalog::bundled();
    let registry = AssetRegistry::build(&catalog).expect("registry");
    let resolver = Resolver::new(&catalog, &registry, ResolverConfig::default());

    let mut stream = resolver.resolve("doge").expect("resolve doge");
    let mut magic = [0u8; 8];
    stream.read_exact(&mut magic).expect("read magic");
    assert_eq!(&magic, b"\x89PNG\r\n\x1a\n");
}

#[test]
fn asset_id_wins_over_same_named_path_under_home() {
    let dir = tempfile::tempdir().expect("tempdir");
    common::write_file(&dir.path().join("fry"), b"local fry");

    let catalog = common::test_catalog();
    let registry = common::test_registry();
    let resolver = Resolver::new(&catalog, &registry, ResolverConfig::default())
        .with_home(HomeDir::fixed(dir.path()));

    let stream = resolver.resolve("fry").expect("resolve");
    assert_eq!(stream.as_bytes(), b"\x89PNG fry");
}

#[test]
fn home_relative_file_is_read_exactly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let content: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    common::write_file(&dir.path().join("photos/cat.png"), &content);

    let catalog = common::test_catalog();
    let registry = common::test_registry();
    let resolver = Resolver::new(&catalog, &registry, ResolverConfig::default())
        .with_home(HomeDir::fixed(dir.path()));

    let kind = resolver.classify("~/photos/cat.png").expect("classify");
    assert_eq!(kind, SourceKind::LocalFile(dir.path().join("photos/cat.png")));

    let stream = resolver.fetch(&kind).expect("fetch");
    assert_eq!(stream.into_bytes(), content);
}

#[test]
fn oversized_local_file_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("big.png");
    common::write_file(&path, &[0u8; 64]);

    let catalog = common::test_catalog();
    let registry = common::test_registry();
    let config = ResolverConfig::default().with_max_bytes(63);
    let resolver = Resolver::new(&catalog, &registry, config);

    let err = resolver
        .resolve(&path.to_string_lossy())
        .expect_err("should fail");
    assert!(matches!(err, MemeError::SourceTooLarge { limit: 63, .. }));
    assert_eq!(err.class(), ErrorClass::User);
}

#[test]
fn unrecognized_reference_has_user_class() {
    let catalog = common::test_catalog();
    let registry = common::test_registry();
    let resolver = Resolver::new(&catalog, &registry, ResolverConfig::default())
        .with_home(HomeDir::fixed("/nonexistent"));

    let err = resolver.resolve("grumpycat").expect_err("should fail");
    assert_eq!(err.to_string(), "Image not recognised: 'grumpycat'");
    assert_eq!(err.class(), ErrorClass::User);
}

#[test]
fn decals_are_read_by_catalog_path() {
    let catalog = EmbeddedCatalog::bundled();
    let registry = AssetRegistry::build(&catalog).expect("registry");
    let resolver = Resolver::new(&catalog, &registry, ResolverConfig::default());

    let stream = resolver.fetch_decal(WATERMARK_DECAL).expect("decal");
    assert_eq!(
        stream.as_bytes(),
        catalog.read_entry(WATERMARK_DECAL).expect("entry").as_slice()
    );

    let err = resolver.fetch_decal("watermark").expect_err("should fail");
    assert_eq!(err.class(), ErrorClass::Fatal);
}
