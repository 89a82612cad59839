use folio_core::{
    default_content, AboutView, ContactView, ContentStore, HomeView, Project, ProjectsView,
    SqliteStorage,
};

#[test]
fn home_view_reads_hero_and_strip_paths() {
    let store = ContentStore::init(SqliteStorage::open_in_memory().unwrap());
    let home = HomeView::new(&store);

    assert_eq!(home.hero().name, "Rida Khanoufi");
    assert!(!home.hero().image.is_empty());
    assert_eq!(home.highlight_strip().len(), 6);
    assert_eq!(home.services().len(), 4);
    assert!(!home.intro().title.is_empty());
    assert!(!home.currently().is_empty());
}

#[test]
fn about_view_reads_facts_skills_and_process() {
    let store = ContentStore::init(SqliteStorage::open_in_memory().unwrap());
    let about = AboutView::new(&store);

    assert_eq!(about.section().quick_facts.location, "Agadir, Morocco");
    assert!(!about.section().skills.ui.is_empty());
    assert_eq!(about.process().len(), 4);
    assert_eq!(about.process()[0].title, "Understand");
}

#[test]
fn projects_view_exposes_entries_and_case_study_fields() {
    let store = ContentStore::init(SqliteStorage::open_in_memory().unwrap());
    let projects = ProjectsView::new(&store);

    assert_eq!(projects.projects().len(), 3);

    let destitia = projects.project_by_id("destitia").unwrap();
    assert_eq!(destitia.title, "Destitia");
    assert!(destitia.case_study_url.is_some());
    assert!(destitia.role.is_some());
    assert_eq!(destitia.process.as_ref().unwrap().len(), 3);

    assert!(projects.project_by_id("nope").is_none());
}

#[test]
fn contact_view_reads_relay_id_and_socials() {
    let store = ContentStore::init(SqliteStorage::open_in_memory().unwrap());
    let contact = ContactView::new(&store);

    assert_eq!(contact.email(), "ridakhanoufi0201@gmail.com");
    assert_eq!(contact.phone(), "0637102373");
    assert_eq!(contact.location(), "Agadir, Morocco");
    assert_eq!(contact.relay_id(), "xgvgrzqr");
    assert_eq!(contact.socials().behance, "www.behance.net/ridakhanoufi");
    assert!(!contact.socials().linkedin.is_empty());
    assert!(!contact.socials().github.is_empty());
}

#[test]
fn duplicate_project_ids_are_accepted_not_deduplicated() {
    // Known gap: ids are operator-authored and the system performs no
    // uniqueness validation. Lookups resolve to the first match.
    let mut store = ContentStore::init(SqliteStorage::open_in_memory().unwrap());

    let mut document = default_content();
    document.projects = vec![
        Project {
            id: "dup".to_string(),
            title: "First".to_string(),
            ..Project::default()
        },
        Project {
            id: "dup".to_string(),
            title: "Second".to_string(),
            ..Project::default()
        },
    ];
    store.replace(document);

    let projects = ProjectsView::new(&store);
    assert_eq!(projects.projects().len(), 2);
    assert_eq!(projects.project_by_id("dup").unwrap().title, "First");
}
