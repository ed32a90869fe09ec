//! Built-in demonstration site: a university website content tree

use generational_arena::Index;
use tracing::instrument;

use crate::cli::output;
use crate::domain::{PageArena, PageData, SiteError, SiteResult};

fn page(title: &str, route: &str, tags: &[&str]) -> PageData {
    let mut data = PageData::new(title, route);
    for tag in tags {
        data.add_tag(tag);
    }
    data
}

/// Build the demonstration tree: Home with four sections, each with
/// sub-pages, tagged for cross-cutting search.
#[instrument(level = "debug")]
pub fn build_demo_site() -> SiteResult<PageArena> {
    let mut site = PageArena::new();

    let home = site.insert_page(page("Home", "/", &[]), None)?;

    let academics = site.insert_page(
        page("Academics", "/academics", &["education", "courses"]),
        Some(home),
    )?;
    let departments = site.insert_page(
        page("Departments", "/departments", &["faculty", "programs"]),
        Some(home),
    )?;
    site.insert_page(
        page("Admissions", "/admissions", &["enrollment"]),
        Some(home),
    )?;
    let student_life = site.insert_page(
        page("Student Life", "/student-life", &["campus", "activities"]),
        Some(home),
    )?;

    site.insert_page(
        page(
            "Undergraduate",
            "/academics/undergraduate",
            &["bachelors", "education"],
        ),
        Some(academics),
    )?;
    site.insert_page(
        page("Graduate", "/academics/graduate", &["masters", "phd"]),
        Some(academics),
    )?;
    site.insert_page(
        page("Courses", "/academics/courses", &["syllabus", "education"]),
        Some(academics),
    )?;

    let engineering = site.insert_page(
        page(
            "Engineering",
            "/departments/engineering",
            &["technology", "programs"],
        ),
        Some(departments),
    )?;
    site.insert_page(
        page(
            "Business",
            "/departments/business",
            &["management", "programs"],
        ),
        Some(departments),
    )?;
    site.insert_page(
        page(
            "Arts & Sciences",
            "/departments/arts",
            &["liberal-arts", "programs"],
        ),
        Some(departments),
    )?;

    site.insert_page(
        page(
            "Computer Science",
            "/departments/engineering/cs",
            &["programming", "technology"],
        ),
        Some(engineering),
    )?;
    site.insert_page(
        page(
            "Mechanical",
            "/departments/engineering/mechanical",
            &["design", "technology"],
        ),
        Some(engineering),
    )?;

    site.insert_page(
        page("Clubs", "/student-life/clubs", &["activities", "social"]),
        Some(student_life),
    )?;
    site.insert_page(
        page("Sports", "/student-life/sports", &["athletics", "activities"]),
        Some(student_life),
    )?;
    site.insert_page(
        page("Housing", "/student-life/housing", &["dormitory", "campus"]),
        Some(student_life),
    )?;

    Ok(site)
}

fn route_index(site: &PageArena, route: &str) -> SiteResult<Index> {
    site.find_route(route)
        .ok_or_else(|| SiteError::RouteNotFound(route.to_string()))
}

fn print_breadcrumb(site: &PageArena, route: &str) -> SiteResult<()> {
    let idx = route_index(site, route)?;
    let title = &site.get_page(idx).ok_or(SiteError::PageNotFound(idx))?.data.title;
    output::detail(&format!("{}: {}", title, site.breadcrumb(idx)?));
    Ok(())
}

fn print_tag_hits(site: &PageArena, tag: &str) -> SiteResult<()> {
    output::info(&format!("Pages tagged '{}':", tag));
    for idx in site.search_by_tag(tag) {
        if let Some(node) = site.get_page(idx) {
            output::detail(&format!("-> {}", node.data));
        }
    }
    Ok(())
}

/// Run the full demonstration: breadcrumbs, tag search, recency filter and
/// the rendered structure.
#[instrument(level = "debug")]
pub fn run_demo() -> SiteResult<()> {
    let site = build_demo_site()?;

    output::header("Navigation breadcrumbs");
    print_breadcrumb(&site, "/departments/engineering/cs")?;
    print_breadcrumb(&site, "/student-life/clubs")?;
    print_breadcrumb(&site, "/academics/graduate")?;
    println!();

    output::header("Search by tag");
    print_tag_hits(&site, "technology")?;
    print_tag_hits(&site, "activities")?;
    println!();

    output::header("Recently updated");
    output::info("Pages updated in the last 30 days:");
    for idx in site.recently_modified(30) {
        if let Some(node) = site.get_page(idx) {
            output::detail(&format!("-> {}", node.data.title));
        }
    }
    println!();

    output::header("Site structure");
    if let Some(root) = site.root() {
        print!("{}", site.to_display_tree(root)?);
    }

    Ok(())
}
