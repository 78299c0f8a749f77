//! Server-side HTML rendering
//!
//! Pages are assembled from plain strings. All dynamic text passes through
//! [`escape`] so stored values cannot inject markup.

use crate::models::Starfish;

/// Escape text for safe interpolation into HTML bodies and attributes.
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

/// Wrap page content in the shared document skeleton.
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; }}
table {{ border-collapse: collapse; }}
th, td {{ border: 1px solid #999; padding: 0.3rem 0.6rem; }}
form.inline {{ display: inline; }}
label {{ display: block; margin-top: 0.5rem; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// The listing page: one table row per record plus edit and delete controls.
pub fn index_page(starfish: &[Starfish]) -> String {
    let mut rows = String::new();
    for s in starfish {
        rows.push_str(&format!(
            r#"<tr>
<td>{id}</td>
<td>{name}</td>
<td>{color}</td>
<td>{limbs}</td>
<td>{depth}</td>
<td>{age}</td>
<td>{gender}</td>
<td>{latin_name}</td>
<td>{habitat}</td>
<td><a href="/update/{id}">Edit</a>
<form class="inline" method="post" action="/delete/{id}"><button type="submit">Delete</button></form></td>
</tr>
"#,
            id = s.id,
            name = escape(&s.name),
            color = escape(&s.color),
            limbs = s.limbs,
            depth = s.depth,
            age = s.age,
            gender = escape(&s.gender),
            latin_name = escape(&s.latin_name),
            habitat = escape(&s.habitat),
        ));
    }

    let body = format!(
        r#"<h1>Starfish</h1>
<p><a href="/create">Add a starfish</a></p>
<table>
<tr><th>Id</th><th>Name</th><th>Color</th><th>Limbs</th><th>Depth</th><th>Age</th><th>Gender</th><th>Latin name</th><th>Habitat</th><th></th></tr>
{rows}</table>
"#
    );

    layout("Starfish", &body)
}

/// The create form, with every field blank.
pub fn create_page() -> String {
    form_page("Add a starfish", "/create", None)
}

/// The update form, prefilled from the stored record.
pub fn update_page(starfish: &Starfish) -> String {
    let action = format!("/update/{}", starfish.id);
    form_page("Edit starfish", &action, Some(starfish))
}

fn form_page(title: &str, action: &str, current: Option<&Starfish>) -> String {
    // Blank inputs on the create form, stored values on the update form.
    let (name, color, gender, latin_name, habitat, limbs, depth, age) = match current {
        Some(s) => (
            escape(&s.name),
            escape(&s.color),
            escape(&s.gender),
            escape(&s.latin_name),
            escape(&s.habitat),
            s.limbs.to_string(),
            s.depth.to_string(),
            s.age.to_string(),
        ),
        None => Default::default(),
    };

    let body = format!(
        r#"<h1>{title}</h1>
<form method="post" action="{action}">
{name}{color}{limbs}{depth}{age}{gender}{latin_name}{habitat}<p><button type="submit">Save</button> <a href="/">Cancel</a></p>
</form>
"#,
        title = escape(title),
        action = escape(action),
        name = input_row("Name", "name", "text", &name),
        color = input_row("Color", "color", "text", &color),
        limbs = input_row("Limbs", "limbs", "number", &limbs),
        depth = input_row("Depth", "depth", "text", &depth),
        age = input_row("Age", "age", "number", &age),
        gender = input_row("Gender", "gender", "text", &gender),
        latin_name = input_row("Latin name", "latin_name", "text", &latin_name),
        habitat = input_row("Habitat", "habitat", "text", &habitat),
    );

    layout(title, &body)
}

fn input_row(label: &str, name: &str, input_type: &str, value: &str) -> String {
    format!(
        "<label>{label} <input type=\"{input_type}\" name=\"{name}\" value=\"{value}\" required></label>\n"
    )
}
