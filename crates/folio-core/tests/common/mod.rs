use folio_core::{Project, ProjectForm, ProjectTranslation};

/// A published project with both canonical locales and two images
#[allow(dead_code)]
pub fn bilingual_project() -> Project {
    let mut project = Project::new("proj-1", "Lead Dev");
    project.github_url = Some("https://github.com/acme/shop".to_string());
    project.live_url = Some("https://shop.acme.dev".to_string());
    project.main_image = Some("cover.png".to_string());
    project.is_published = true;
    project.tech_stack = vec!["React".to_string(), "Node".to_string(), "Postgres".to_string()];
    project.images = vec!["a.png".to_string(), "b.png".to_string()];
    project.translations = vec![
        ProjectTranslation::new("en", "Shop", "An online shop", "Full description")
            .with_architecture("Monorepo")
            .with_features(["cart", "checkout"]),
        ProjectTranslation::new("ar", "متجر", "متجر إلكتروني", "وصف كامل")
            .with_features(["سلة", "دفع"]),
    ];
    project
}

/// A project that predates the Arabic locale
#[allow(dead_code)]
pub fn english_only_project() -> Project {
    let mut project = Project::new("proj-2", "Lead Dev");
    project.tech_stack = vec!["React".to_string(), "Node".to_string()];
    project.images = vec!["a.png".to_string(), "b.png".to_string()];
    project.translations = vec![ProjectTranslation::new("en", "T", "S", "D").with_features(["x"])];
    project
}

/// The no-edit snapshot of a project
#[allow(dead_code)]
pub fn snapshot(project: &Project) -> ProjectForm {
    ProjectForm::from_project(project)
}
