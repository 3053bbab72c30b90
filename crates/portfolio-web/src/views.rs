//! HTML pages
//!
//! Pages are built with `format!` and share one layout. Every value that
//! came from a form goes through [`escape`].

use std::fmt::Write;

use portfolio_core::domain::{DATE_FORMAT, Project};

/// Technologies offered as checkboxes on the project forms
pub const TECHNOLOGY_CHOICES: [&str; 4] = ["nodejs", "vuejs", "reactjs", "nextjs"];

/// Escape text for HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title}</title></head><body>\
<nav><a href=\"/\">Home</a> | <a href=\"/add-project\">Add Project</a> | <a href=\"/contact\">Contact Me</a></nav>\
<main>{body}</main></body></html>",
        title = escape(title),
        body = body
    )
}

/// Project images are recorded relative to the site root
fn image_src(project: &Project) -> String {
    escape(&format!("/{}", project.image.trim_start_matches('/')))
}

fn technology_list(project: &Project) -> String {
    project
        .technologies
        .iter()
        .map(|tech| format!("<li>{}</li>", escape(tech)))
        .collect()
}

/// Project list
pub fn index(projects: &[Project]) -> String {
    let mut cards = String::new();
    for project in projects {
        let _ = write!(
            cards,
            "<article class=\"project-card\">\
<img src=\"{img}\" alt=\"{name}\" width=\"240\">\
<h3><a href=\"/detail-project/{id}\">{name}</a></h3>\
<p>Duration: {duration}</p><p>{description}</p><ul>{techs}</ul>\
<a href=\"/edit-project/{id}\">Edit</a> <a href=\"/delete-project/{id}\">Delete</a>\
</article>",
            img = image_src(project),
            id = project.id,
            name = escape(&project.name),
            duration = escape(project.duration()),
            description = escape(&project.description),
            techs = technology_list(project),
        );
    }
    if projects.is_empty() {
        cards.push_str("<p>No projects yet.</p>");
    }
    layout("My Project", &format!("<h1>My Project</h1><section>{}</section>", cards))
}

fn technology_checkboxes(selected: &[String]) -> String {
    TECHNOLOGY_CHOICES
        .iter()
        .map(|tech| {
            let checked = if selected.iter().any(|s| s == tech) { " checked" } else { "" };
            format!(
                "<label><input type=\"checkbox\" name=\"technologies\" value=\"{tech}\"{checked}> {tech}</label>"
            )
        })
        .collect()
}

fn project_form(action: &str, heading: &str, project: Option<&Project>) -> String {
    let name = project.map(|p| escape(&p.name)).unwrap_or_default();
    let start = project
        .map(|p| p.start_date().format(DATE_FORMAT).to_string())
        .unwrap_or_default();
    let end = project
        .map(|p| p.end_date().format(DATE_FORMAT).to_string())
        .unwrap_or_default();
    let description = project.map(|p| escape(&p.description)).unwrap_or_default();
    let techs = technology_checkboxes(project.map(|p| p.technologies.as_slice()).unwrap_or(&[]));

    format!(
        "<h1>{heading}</h1>\
<form action=\"{action}\" method=\"post\" enctype=\"multipart/form-data\">\
<label>Project Name <input type=\"text\" name=\"project_name\" value=\"{name}\" required></label>\
<label>Start Date <input type=\"date\" name=\"start_date\" value=\"{start}\" required></label>\
<label>End Date <input type=\"date\" name=\"end_date\" value=\"{end}\" required></label>\
<label>Description <textarea name=\"description\">{description}</textarea></label>\
<fieldset><legend>Technologies</legend>{techs}</fieldset>\
<label>Upload Image <input type=\"file\" name=\"image\" accept=\"image/*\" required></label>\
<button type=\"submit\">Submit</button></form>"
    )
}

/// Creation form
pub fn add_project() -> String {
    layout("Add Project", &project_form("/store-project", "Add My Project", None))
}

/// Edit form, prefilled from `project`
pub fn edit_project(project: &Project) -> String {
    let action = format!("/update-project/{}", project.id);
    layout(
        "Edit Project",
        &project_form(&action, "Edit My Project", Some(project)),
    )
}

/// One project
pub fn detail_project(project: &Project) -> String {
    let body = format!(
        "<h1>{name}</h1><img src=\"{img}\" alt=\"{name}\" width=\"480\">\
<h3>Duration</h3><p>{start} - {end}</p><p>{duration}</p>\
<h3>Technologies</h3><ul>{techs}</ul>\
<p>{description}</p>",
        name = escape(&project.name),
        img = image_src(project),
        start = project.start_date().format("%d %b %Y"),
        end = project.end_date().format("%d %b %Y"),
        duration = escape(project.duration()),
        techs = technology_list(project),
        description = escape(&project.description),
    );
    layout(&project.name, &body)
}

/// Contact page; the form opens the visitor's mail client
pub fn contact() -> String {
    layout(
        "Contact Me",
        "<h1>Contact Me</h1>\
<form action=\"mailto:\" method=\"get\" enctype=\"text/plain\">\
<label>Name <input type=\"text\" name=\"name\"></label>\
<label>Email <input type=\"email\" name=\"email\"></label>\
<label>Phone Number <input type=\"tel\" name=\"phone_number\"></label>\
<label>Subject <input type=\"text\" name=\"subject\"></label>\
<label>Message <textarea name=\"body\"></textarea></label>\
<button type=\"submit\">Submit</button></form>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::domain::parse_date;

    fn project() -> Project {
        let mut project = Project::new(
            "<b>Site</b>",
            parse_date("start_date", "2022-01-01").unwrap(),
            parse_date("end_date", "2022-02-01").unwrap(),
        )
        .with_technologies(["rust", "reactjs"])
        .with_image("public/uploads/b-site-b.png");
        project.id = 3;
        project
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_index_lists_projects_with_positions() {
        let html = index(&[project()]);
        assert!(html.contains("/detail-project/3"));
        assert!(html.contains("/delete-project/3"));
        assert!(html.contains("&lt;b&gt;Site&lt;/b&gt;"));
        assert!(!html.contains("<b>Site</b>"));
        assert!(html.contains("1 month 1 days"));
        assert!(html.contains("src=\"/public/uploads/b-site-b.png\""));
    }

    #[test]
    fn test_index_empty() {
        assert!(index(&[]).contains("No projects yet."));
    }

    #[test]
    fn test_edit_form_prefills_values() {
        let html = edit_project(&project());
        assert!(html.contains("action=\"/update-project/3\""));
        assert!(html.contains("value=\"2022-01-01\""));
        assert!(html.contains("value=\"reactjs\" checked"));
        assert!(html.contains("value=\"nodejs\">"));
    }

    #[test]
    fn test_detail_shows_duration() {
        let html = detail_project(&project());
        assert!(html.contains("01 Jan 2022 - 01 Feb 2022"));
        assert!(html.contains("<li>rust</li>"));
    }
}
