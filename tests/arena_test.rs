//! Tests for PageArena traversals

use chrono::{Duration, Utc};
use generational_arena::Index;
use rstest::{fixture, rstest};
use sitetree::domain::{PageArena, PageData, SiteError};
use sitetree::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn tagged(title: &str, route: &str, tags: &[&str]) -> PageData {
    let mut data = PageData::new(title, route);
    for tag in tags {
        data.add_tag(tag);
    }
    data
}

/// Home -> Academics -> {Undergraduate, Graduate, Courses}
#[fixture]
fn academics_site() -> (PageArena, Index) {
    let mut site = PageArena::new();
    let home = site.insert_page(PageData::new("Home", "/"), None).unwrap();
    let academics = site
        .insert_page(
            tagged("Academics", "/academics", &["education", "courses"]),
            Some(home),
        )
        .unwrap();
    let undergraduate = site
        .insert_page(
            tagged(
                "Undergraduate",
                "/academics/undergraduate",
                &["bachelors", "education"],
            ),
            Some(academics),
        )
        .unwrap();
    site.insert_page(
        PageData::new("Graduate", "/academics/graduate"),
        Some(academics),
    )
    .unwrap();
    site.insert_page(
        PageData::new("Courses", "/academics/courses"),
        Some(academics),
    )
    .unwrap();
    (site, undergraduate)
}

#[rstest]
fn given_parent_chain_when_breadcrumb_then_titles_joined_from_root(
    academics_site: (PageArena, Index),
) {
    let (site, undergraduate) = academics_site;

    assert_eq!(
        site.breadcrumb(undergraduate).unwrap(),
        "Home > Academics > Undergraduate"
    );
    let root = site.root().unwrap();
    assert_eq!(site.breadcrumb(root).unwrap(), "Home");
}

#[rstest]
fn given_tagged_pages_when_searching_then_preorder_matches(academics_site: (PageArena, Index)) {
    let (site, _) = academics_site;

    let titles: Vec<_> = site
        .search_by_tag("education")
        .into_iter()
        .map(|idx| site.get_page(idx).unwrap().data.title.clone())
        .collect();

    // Parents before children, siblings in attachment order
    assert_eq!(titles, ["Academics", "Undergraduate"]);
}

#[rstest]
fn given_unknown_tag_when_searching_then_empty(academics_site: (PageArena, Index)) {
    let (site, _) = academics_site;
    assert!(site.search_by_tag("nonexistent").is_empty());
}

#[rstest]
fn given_fresh_pages_when_filtering_thirty_days_then_all_included(
    academics_site: (PageArena, Index),
) {
    let (site, _) = academics_site;
    assert_eq!(site.recently_modified(30).len(), site.len());
}

#[test]
fn given_cutoff_when_filtering_then_strictly_after_only() {
    let cutoff = Utc::now() - Duration::days(30);
    let mut site = PageArena::new();
    let home = site
        .insert_page(
            PageData::with_modified("Home", "/", cutoff - Duration::days(10)),
            None,
        )
        .unwrap();
    // Stale parent, fresh child
    let fresh = site
        .insert_page(
            PageData::with_modified("News", "/news", cutoff + Duration::days(10)),
            Some(home),
        )
        .unwrap();
    // Exactly at the cutoff is excluded
    site.insert_page(
        PageData::with_modified("Archive", "/archive", cutoff),
        Some(home),
    )
    .unwrap();

    assert_eq!(site.modified_since(cutoff), vec![fresh]);
}

#[test]
fn given_empty_arena_when_iterating_then_nothing() {
    let site = PageArena::new();
    assert!(site.is_empty());
    assert_eq!(site.iter().count(), 0);
    assert_eq!(site.depth(), 0);
    assert!(site.root().is_none());
}

#[rstest]
fn given_tree_when_iterating_then_preorder(academics_site: (PageArena, Index)) {
    let (site, _) = academics_site;

    let routes: Vec<_> = site.iter().map(|(_, n)| n.data.route.clone()).collect();
    assert_eq!(
        routes,
        [
            "/",
            "/academics",
            "/academics/undergraduate",
            "/academics/graduate",
            "/academics/courses"
        ]
    );
    assert_eq!(site.depth(), 3);
}

#[rstest]
fn given_route_when_finding_then_index_resolves(academics_site: (PageArena, Index)) {
    let (site, undergraduate) = academics_site;

    assert_eq!(
        site.find_route("/academics/undergraduate"),
        Some(undergraduate)
    );
    assert!(site.find_route("/nope").is_none());
}

#[test]
fn given_existing_root_when_inserting_second_root_then_errors() {
    let mut site = PageArena::new();
    site.insert_page(PageData::new("Home", "/"), None).unwrap();

    let result = site.insert_page(PageData::new("Other", "/other"), None);
    assert!(matches!(result, Err(SiteError::RootAlreadyExists(_))));
}

#[test]
fn given_unresolvable_parent_index_when_inserting_then_errors() {
    let mut other = PageArena::new();
    let other_root = other.insert_page(PageData::new("Home", "/"), None).unwrap();
    // Second slot, never allocated in `site` below
    let foreign = other
        .insert_page(PageData::new("About", "/about"), Some(other_root))
        .unwrap();

    let mut site = PageArena::new();
    site.insert_page(PageData::new("Home", "/"), None).unwrap();

    let result = site.insert_page(PageData::new("About", "/about"), Some(foreign));
    assert!(matches!(result, Err(SiteError::PageNotFound(_))));
}

#[rstest]
fn given_tree_when_rendering_then_every_page_listed(academics_site: (PageArena, Index)) {
    let (site, _) = academics_site;

    let rendered = site.to_display_tree(site.root().unwrap()).unwrap().to_string();
    assert!(rendered.contains("Home (/)"));
    assert!(rendered.contains("Academics (/academics)"));
    assert!(rendered.contains("Undergraduate (/academics/undergraduate)"));
}
