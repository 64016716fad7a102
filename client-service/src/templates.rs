use minijinja::Environment;

pub const SEARCH_PAGE: &str = "search.html";

/// Template environment with every page registered. `.html` names get
/// HTML auto-escaping.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(SEARCH_PAGE, include_str!("../templates/search.html"))?;
    Ok(env)
}
