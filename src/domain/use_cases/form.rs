use chrono::NaiveDate;
use validator::Validate;

use crate::constants::SAVE_PROJECT_FALLBACK;
use crate::entities::project::{Project, ProjectDraft, ProjectStatus};
use crate::errors::ApiError;
use crate::repositories::project::ProjectRepository;

/// Submission lifecycle of the editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Error(String),
}

/// Local edit buffer for one project's fields.
///
/// `tech_input` and `tag_input` hold pending list entries; the add
/// operations move them into their lists, refusing duplicates so the
/// lists stay unique without the store having to enforce it.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    editing_id: Option<String>,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: String,
    pub project_url: String,
    pub github_url: String,
    pub status: ProjectStatus,
    pub tags: Vec<String>,
    pub featured: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub tech_input: String,
    pub tag_input: String,
    state: FormState,
}

impl ProjectForm {
    /// Blank form in create mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing project, in edit mode. Date
    /// fields are reduced to calendar-date precision.
    pub fn edit(project: &Project) -> Self {
        ProjectForm {
            editing_id: Some(project.id.clone()),
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            image_url: project.image_url.clone(),
            project_url: project.project_url.clone().unwrap_or_default(),
            github_url: project.github_url.clone().unwrap_or_default(),
            status: project.status,
            tags: project.tags.clone(),
            featured: project.featured,
            start_date: Some(project.start_date.date_naive()),
            end_date: project.end_date.map(|date| date.date_naive()),
            ..Self::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FormState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Move the pending tech buffer into the list. Blank or duplicate
    /// input leaves both the list and the buffer untouched.
    pub fn add_technology(&mut self) {
        push_unique(&mut self.technologies, &mut self.tech_input);
    }

    pub fn remove_technology(&mut self, value: &str) {
        self.technologies.retain(|entry| entry != value);
    }

    pub fn add_tag(&mut self) {
        push_unique(&mut self.tags, &mut self.tag_input);
    }

    pub fn remove_tag(&mut self, value: &str) {
        self.tags.retain(|entry| entry != value);
    }

    /// Build the request payload, enforcing the required-field policy.
    pub fn to_draft(&self) -> Result<ProjectDraft, ApiError> {
        let start_date = self
            .start_date
            .ok_or_else(|| ApiError::Validation("Start date is required".to_string()))?;

        let draft = ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            technologies: self.technologies.clone(),
            image_url: self.image_url.clone(),
            project_url: optional_field(&self.project_url),
            github_url: optional_field(&self.github_url),
            status: self.status,
            tags: self.tags.clone(),
            featured: self.featured,
            start_date,
            end_date: self.end_date,
        };
        draft.validate()?;

        Ok(draft)
    }

    /// Create or update according to mode. On success the form resets
    /// to idle and the stored project is returned; on failure the
    /// error message stays on the form so the operator can retry.
    pub async fn submit<R: ProjectRepository>(&mut self, repo: &R) -> Option<Project> {
        let draft = match self.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.state = FormState::Error(e.display_message(SAVE_PROJECT_FALLBACK));
                return None;
            }
        };

        self.state = FormState::Submitting;

        let result = match &self.editing_id {
            Some(id) => repo.update_project(id, &draft).await,
            None => repo.create_project(&draft).await,
        };

        match result {
            Ok(project) => {
                self.state = FormState::Idle;
                Some(project)
            }
            Err(e) => {
                self.state = FormState::Error(e.display_message(SAVE_PROJECT_FALLBACK));
                None
            }
        }
    }
}

fn push_unique(list: &mut Vec<String>, input: &mut String) {
    let value = input.trim();
    if value.is_empty() || list.iter().any(|existing| existing == value) {
        return;
    }
    list.push(value.to_string());
    input.clear();
}

fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
