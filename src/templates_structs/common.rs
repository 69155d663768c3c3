use askama::Template;

use super::SelectOption;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
    pub accounts: Vec<SelectOption>,
}
