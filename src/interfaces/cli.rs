use chrono::NaiveDate;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};

use crate::constants::{DELETE_PROJECT_FALLBACK, LOGIN_FALLBACK};
use crate::entities::project::{validate_http_url, Project, ProjectStatus};
use crate::use_cases::dashboard::{Dashboard, DashboardTab, DeleteFlow};
use crate::use_cases::form::ProjectForm;
use crate::AppState;

/// Run the interactive admin console until the operator quits.
pub async fn run(state: AppState) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Portfolio admin console").bold());

    loop {
        if !state.auth.is_authenticated() {
            if !login(&state, &theme).await? {
                return Ok(());
            }
        }

        let Some(admin) = state.auth.admin() else {
            continue;
        };
        println!("\n{}", style(format!("Welcome back, {}", admin.username)).cyan());

        let choice = Select::with_theme(&theme)
            .with_prompt("Dashboard")
            .items(&["Manage projects", "Add project", "Logout", "Quit"])
            .default(0)
            .interact()?;

        match choice {
            0 => manage_projects(&state, &theme).await?,
            1 => editor(&state, &theme, None).await?,
            2 => state.auth.logout(),
            _ => return Ok(()),
        }
    }
}

async fn login(state: &AppState, theme: &ColorfulTheme) -> anyhow::Result<bool> {
    loop {
        let username: String = Input::with_theme(theme)
            .with_prompt("Username")
            .interact_text()?;
        let password = Password::with_theme(theme).with_prompt("Password").interact()?;

        match state.auth.login(&username, &password).await {
            Ok(_) => {
                println!("{}", style("Login successful!").green());
                return Ok(true);
            }
            Err(e) => {
                println!("{}", style(e.display_message(LOGIN_FALLBACK)).red());
                let retry = Confirm::with_theme(theme)
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(false);
                }
            }
        }
    }
}

async fn manage_projects(state: &AppState, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let mut dashboard = Dashboard::new();

    loop {
        match dashboard.tab() {
            DashboardTab::Editor => {
                let target = dashboard.editing().cloned();
                editor(state, theme, target).await?;
                dashboard.close_editor();
            }
            DashboardTab::Projects => {
                state.projects.refetch().await;
                if let Some(error) = state.projects.error() {
                    println!("{}", style(error).red());
                }

                let projects = state.projects.projects();
                if projects.is_empty() {
                    if state.projects.error().is_none() {
                        println!("No projects found. Get started by creating your first project!");
                    }
                    return Ok(());
                }

                println!("{}", style(format!("Projects ({})", projects.len())).bold());
                let mut items: Vec<String> = projects.iter().map(describe).collect();
                items.push("Back".to_string());

                let choice = Select::with_theme(theme)
                    .with_prompt("Select a project")
                    .items(&items)
                    .default(items.len() - 1)
                    .interact()?;
                if choice == projects.len() {
                    return Ok(());
                }
                let project = projects[choice].clone();

                let action = Select::with_theme(theme)
                    .with_prompt(project.title.clone())
                    .items(&["Edit", "Delete", "Back"])
                    .default(2)
                    .interact()?;
                match action {
                    0 => dashboard.edit(project),
                    1 => delete(state, theme, &project).await?,
                    _ => {}
                }
            }
        }
    }
}

async fn delete(state: &AppState, theme: &ColorfulTheme, project: &Project) -> anyhow::Result<()> {
    let mut flow = DeleteFlow::new();
    flow.request(project.id.clone());

    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Delete '{}'? This cannot be undone", project.title))
        .default(false)
        .interact()?;
    if !confirmed {
        flow.cancel();
        return Ok(());
    }

    match flow.confirm(state.repo.as_ref()).await {
        Ok(true) => println!("{}", style("Project deleted").green()),
        Ok(false) => {}
        Err(e) => println!("{}", style(e.display_message(DELETE_PROJECT_FALLBACK)).red()),
    }
    Ok(())
}

async fn editor(
    state: &AppState,
    theme: &ColorfulTheme,
    target: Option<Project>,
) -> anyhow::Result<()> {
    let mut form = match &target {
        Some(project) => ProjectForm::edit(project),
        None => ProjectForm::new(),
    };

    let heading = if form.is_editing() { "Edit project" } else { "Add new project" };
    println!("\n{}", style(heading).bold());

    loop {
        fill_form(&mut form, theme)?;

        match form.submit(state.repo.as_ref()).await {
            Some(project) => {
                println!("{}", style(format!("Saved '{}'", project.title)).green());
                state.projects.refetch().await;
                return Ok(());
            }
            None => {
                if let Some(error) = form.error() {
                    println!("{}", style(error).red());
                }
                let retry = Confirm::with_theme(theme)
                    .with_prompt("Edit the form and retry?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(());
                }
            }
        }
    }
}

fn fill_form(form: &mut ProjectForm, theme: &ColorfulTheme) -> anyhow::Result<()> {
    form.title = required_text(theme, "Project title", &form.title, "Title is required")?;
    form.description =
        required_text(theme, "Description", &form.description, "Description is required")?;

    let status = Select::with_theme(theme)
        .with_prompt("Status")
        .items(&["ongoing", "completed"])
        .default(match form.status {
            ProjectStatus::Ongoing => 0,
            ProjectStatus::Completed => 1,
        })
        .interact()?;
    form.status = if status == 0 {
        ProjectStatus::Ongoing
    } else {
        ProjectStatus::Completed
    };

    form.image_url = url_text(theme, "Image URL", &form.image_url, true)?;
    form.project_url = url_text(theme, "Project URL (optional)", &form.project_url, false)?;
    form.github_url = url_text(theme, "GitHub URL (optional)", &form.github_url, false)?;

    form.start_date = date_prompt(theme, "Start date (YYYY-MM-DD)", form.start_date, true)?;
    form.end_date = date_prompt(theme, "End date (YYYY-MM-DD, optional)", form.end_date, false)?;

    form.featured = Confirm::with_theme(theme)
        .with_prompt("Featured project?")
        .default(form.featured)
        .interact()?;

    edit_list(theme, "technology", form, true)?;
    edit_list(theme, "tag", form, false)?;

    Ok(())
}

/// Shared entry loop for the technologies and tags editors: an empty
/// line finishes, `-name` removes an entry, anything else is appended
/// through the form's duplicate-refusing add operation.
fn edit_list(
    theme: &ColorfulTheme,
    label: &str,
    form: &mut ProjectForm,
    technologies: bool,
) -> anyhow::Result<()> {
    loop {
        let entries = if technologies { &form.technologies } else { &form.tags };
        if !entries.is_empty() {
            println!("  {}: {}", style(format!("{label} list")).bold(), entries.join(", "));
        }

        let entry: String = Input::with_theme(theme)
            .with_prompt(format!("Add {label} (empty to finish, '-name' to remove)"))
            .allow_empty(true)
            .interact_text()?;
        if entry.trim().is_empty() {
            return Ok(());
        }

        if let Some(name) = entry.strip_prefix('-') {
            if technologies {
                form.remove_technology(name.trim());
            } else {
                form.remove_tag(name.trim());
            }
        } else if technologies {
            form.tech_input = entry;
            form.add_technology();
        } else {
            form.tag_input = entry;
            form.add_tag();
        }
    }
}

fn required_text(
    theme: &ColorfulTheme,
    label: &str,
    current: &str,
    error: &'static str,
) -> anyhow::Result<String> {
    let mut input = Input::<String>::with_theme(theme).with_prompt(label);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    let value = input
        .validate_with(move |value: &String| {
            if value.trim().is_empty() { Err(error) } else { Ok(()) }
        })
        .interact_text()?;
    Ok(value)
}

fn url_text(
    theme: &ColorfulTheme,
    label: &str,
    current: &str,
    required: bool,
) -> anyhow::Result<String> {
    let mut input = Input::<String>::with_theme(theme).with_prompt(label);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    if !required {
        input = input.allow_empty(true);
    }
    let value = input
        .validate_with(move |value: &String| {
            if !required && value.trim().is_empty() {
                return Ok(());
            }
            validate_http_url(value).map_err(|_| "Enter a valid http(s) URL")
        })
        .interact_text()?;
    Ok(value)
}

fn date_prompt(
    theme: &ColorfulTheme,
    label: &str,
    current: Option<NaiveDate>,
    required: bool,
) -> anyhow::Result<Option<NaiveDate>> {
    loop {
        let mut input = Input::<String>::with_theme(theme).with_prompt(label);
        if let Some(date) = current {
            input = input.default(date.format("%Y-%m-%d").to_string());
        }
        if !required {
            input = input.allow_empty(true);
        }

        let raw = input.interact_text()?;
        if raw.trim().is_empty() {
            if required {
                println!("{}", style("A date is required").yellow());
                continue;
            }
            return Ok(None);
        }

        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => return Ok(Some(date)),
            Err(_) => println!("{}", style("Enter the date as YYYY-MM-DD").yellow()),
        }
    }
}

fn describe(project: &Project) -> String {
    let featured = if project.featured { ", featured" } else { "" };
    format!("{} ({}{})", project.title, project.status, featured)
}
