//! HTML fragment rendering for the four page regions.
//!
//! Pure string-in, string-out functions; the [`Surface`](crate::page::Surface)
//! decides where a fragment lands. All API-supplied text is escaped before
//! interpolation.

use crate::models::{Profile, Project, SearchResult, Skill};

/// Fallback shown when the profile has no education entry.
pub const EDUCATION_FALLBACK: &str = "Not specified";
/// Fallback shown when the profile has no bio.
pub const BIO_FALLBACK: &str = "No bio available";

/// Escape text for safe interpolation into an HTML fragment.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// An inline error message, scoped to the region it is rendered into.
pub fn error(message: &str) -> String {
    format!(r#"<div class="error">{}</div>"#, escape_html(message))
}

/// A transient loading placeholder.
pub fn loading(message: &str) -> String {
    format!(r#"<p class="loading">{}</p>"#, escape_html(message))
}

/// The persistent advisory banner shown when the startup health check fails.
pub fn health_banner() -> String {
    error("Warning: Cannot connect to API. Make sure the backend is running.")
}

// ============ Profile ============

/// Render the profile region: name, email, optional fields with fallbacks,
/// and a links section containing only the links that are present.
pub fn profile(profile: &Profile) -> String {
    let education = profile.education.as_deref().unwrap_or(EDUCATION_FALLBACK);
    let bio = profile.bio.as_deref().unwrap_or(BIO_FALLBACK);

    let mut links = String::new();
    if let Some(ref url) = profile.github {
        links.push_str(&link(url, "GitHub"));
    }
    if let Some(ref url) = profile.linkedin {
        links.push_str(&link(url, "LinkedIn"));
    }
    if let Some(ref url) = profile.portfolio {
        links.push_str(&link(url, "Portfolio"));
    }

    format!(
        "<h3>{}</h3>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Education:</strong> {}</p>\
         <p><strong>Bio:</strong> {}</p>\
         <div class=\"links\">{}</div>",
        escape_html(&profile.name),
        escape_html(&profile.email),
        escape_html(education),
        escape_html(bio),
        links,
    )
}

fn link(url: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank">{}</a>"#,
        escape_html(url),
        label
    )
}

// ============ Skills ============

/// Render the top-skills region as labeled tags, or an empty-state message.
pub fn skills(skills: &[Skill]) -> String {
    if skills.is_empty() {
        return "<p>No skills found.</p>".to_string();
    }

    skills
        .iter()
        .map(|skill| {
            format!(
                r#"<span class="skill-tag">{} ({})</span>"#,
                escape_html(&skill.name),
                escape_html(&skill.level)
            )
        })
        .collect()
}

// ============ Projects ============

/// Render the accumulated project list as cards, followed by a Load More
/// control while more data may be available.
pub fn projects(projects: &[Project], has_more: bool, filter: Option<&str>) -> String {
    let mut out: String = projects.iter().map(project_card).collect();
    if has_more {
        out.push_str(&load_more_control(filter));
    }
    out
}

/// The empty-state message for a fresh load that returned nothing.
pub fn projects_empty() -> String {
    "<p>No projects found.</p>".to_string()
}

fn project_card(project: &Project) -> String {
    let tags: String = project
        .skills
        .iter()
        .map(|skill| {
            format!(
                r#"<span class="skill-tag">{}</span>"#,
                escape_html(&skill.name)
            )
        })
        .collect();

    let mut links = Vec::new();
    if let Some(ref url) = project.github_url {
        links.push(link(url, "GitHub"));
    }
    if let Some(ref url) = project.live_url {
        links.push(link(url, "Live Demo"));
    }
    let links_html = if links.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="links">{}</div>"#, links.join(" | "))
    };

    format!(
        "<div class=\"project-card\">\
         <h3>{}</h3>\
         <p>{}</p>\
         <div class=\"skills\">{}</div>\
         {}\
         </div>",
        escape_html(&project.title),
        escape_html(&project.description),
        tags,
        links_html,
    )
}

fn load_more_control(filter: Option<&str>) -> String {
    format!(
        r#"<button class="load-more" data-skill="{}">Load More Projects</button>"#,
        escape_html(filter.unwrap_or(""))
    )
}

// ============ Search ============

/// Render search hits as cards, or an empty-state message.
pub fn search_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "<p>No results found.</p>".to_string();
    }

    results
        .iter()
        .map(|result| {
            format!(
                "<div class=\"search-result\">\
                 <div class=\"search-result-type\">{}</div>\
                 <h4>{}</h4>\
                 <p>{}</p>\
                 </div>",
                escape_html(&result.kind),
                escape_html(&result.title),
                escape_html(&result.description),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Profile, Project, SearchResult, Skill};

    fn full_profile() -> Profile {
        Profile {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            education: Some("BSc".to_string()),
            bio: Some("Builds things.".to_string()),
            github: Some("https://github.com/jane".to_string()),
            linkedin: None,
            portfolio: None,
        }
    }

    #[test]
    fn test_profile_optional_fallbacks() {
        let mut p = full_profile();
        p.education = None;
        p.bio = None;
        let html = profile(&p);
        assert!(html.contains("Not specified"));
        assert!(html.contains("No bio available"));
    }

    #[test]
    fn test_profile_renders_only_present_links() {
        let html = profile(&full_profile());
        assert!(html.contains(">GitHub</a>"));
        assert!(!html.contains(">LinkedIn</a>"));
        assert!(!html.contains(">Portfolio</a>"));
    }

    #[test]
    fn test_profile_escapes_api_text() {
        let mut p = full_profile();
        p.name = "<script>alert(1)</script>".to_string();
        let html = profile(&p);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_skills_empty_state() {
        assert_eq!(skills(&[]), "<p>No skills found.</p>");
    }

    #[test]
    fn test_skills_show_name_and_level() {
        let html = skills(&[Skill {
            name: "Rust".to_string(),
            level: "expert".to_string(),
        }]);
        assert!(html.contains("Rust (expert)"));
    }

    fn project(title: &str, github: Option<&str>, live: Option<&str>) -> Project {
        Project {
            title: title.to_string(),
            description: "desc".to_string(),
            skills: vec![Skill {
                name: "Rust".to_string(),
                level: "expert".to_string(),
            }],
            github_url: github.map(String::from),
            live_url: live.map(String::from),
        }
    }

    #[test]
    fn test_project_links_joined_by_separator() {
        let html = projects(
            &[project("P", Some("https://g"), Some("https://l"))],
            false,
            None,
        );
        assert!(html.contains(">GitHub</a> | <a"));
        assert!(html.contains(">Live Demo</a>"));
    }

    #[test]
    fn test_project_without_links_has_no_links_div() {
        let html = projects(&[project("P", None, None)], false, None);
        assert!(!html.contains(r#"<div class="links">"#));
    }

    #[test]
    fn test_load_more_only_when_more_available() {
        let p = [project("P", None, None)];
        assert!(projects(&p, true, None).contains("Load More Projects"));
        assert!(!projects(&p, false, None).contains("Load More Projects"));
    }

    #[test]
    fn test_load_more_carries_active_filter() {
        let html = projects(&[project("P", None, None)], true, Some("rust"));
        assert!(html.contains(r#"data-skill="rust""#));
    }

    #[test]
    fn test_search_results_empty_state() {
        assert_eq!(search_results(&[]), "<p>No results found.</p>");
    }

    #[test]
    fn test_search_result_card() {
        let html = search_results(&[SearchResult {
            kind: "project".to_string(),
            title: "Folio".to_string(),
            description: "client".to_string(),
        }]);
        assert!(html.contains(r#"<div class="search-result-type">project</div>"#));
        assert!(html.contains("<h4>Folio</h4>"));
    }
}
