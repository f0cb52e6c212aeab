use askama::Template;

use super::dto::Item;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub todos: Vec<Item>,
}
