//! The "new project" form.

use std::sync::Arc;

use tracing::debug;
use tracker_models::ProjectId;
use tracker_store::ProjectStore;

use crate::validation::{parse_number, Validatable, ValidationError};

/// Three text fields and a submit action.
///
/// Input is validated here; only valid projects ever reach the store.
pub struct ProjectInput {
    store: Arc<ProjectStore>,
    title: String,
    description: String,
    people: String,
}

impl ProjectInput {
    pub fn new(store: Arc<ProjectStore>) -> Self {
        Self {
            store,
            title: String::new(),
            description: String::new(),
            people: String::new(),
        }
    }

    /// Replaces the contents of all three fields.
    pub fn fill(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.people = people.into();
    }

    /// Current field contents: title, description, people.
    pub fn fields(&self) -> (&str, &str, &str) {
        (&self.title, &self.description, &self.people)
    }

    /// Validates the fields and, on success, adds the project and clears
    /// the form. On failure the fields are kept for correction.
    pub fn submit(&mut self) -> Result<ProjectId, ValidationError> {
        let (title, description, people) = self.gather_user_input()?;
        let id = self.store.add_project(title, description, people);
        self.clear_inputs();
        Ok(id)
    }

    fn gather_user_input(&self) -> Result<(String, String, u32), ValidationError> {
        Validatable::text("title", &self.title).required().validate()?;
        Validatable::text("description", &self.description)
            .required()
            .validate()?;

        let people = parse_number("people", &self.people)?;
        Validatable::number("people", people).required().min(0).validate()?;
        let people = u32::try_from(people).map_err(|_| ValidationError::TooLarge {
            field: "people",
            max: i64::from(u32::MAX),
        })?;

        debug!(title = %self.title.trim(), people, "Form input accepted");
        Ok((
            self.title.trim().to_string(),
            self.description.trim().to_string(),
            people,
        ))
    }

    fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_models::ProjectStatus;

    fn form() -> (Arc<ProjectStore>, ProjectInput) {
        let store = Arc::new(ProjectStore::new());
        let input = ProjectInput::new(Arc::clone(&store));
        (store, input)
    }

    #[test]
    fn test_submit_adds_active_project_and_clears() {
        let (store, mut input) = form();
        input.fill(" Build API ", "backend work", "3");

        let id = input.submit().unwrap();

        let project = store.get(&id).unwrap();
        assert_eq!(project.title, "Build API");
        assert_eq!(project.people, 3);
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(input.fields(), ("", "", ""));
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let (store, mut input) = form();
        input.fill("", "backend work", "3");

        assert_eq!(
            input.submit(),
            Err(ValidationError::Required { field: "title" })
        );
        assert!(store.is_empty());
        assert_eq!(input.fields(), ("", "backend work", "3"));
    }

    #[test]
    fn test_missing_description_is_rejected() {
        let (store, mut input) = form();
        input.fill("Build API", "  ", "3");

        assert_eq!(
            input.submit(),
            Err(ValidationError::Required { field: "description" })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_people_must_be_positive_integer() {
        let (store, mut input) = form();

        input.fill("Build API", "backend work", "0");
        assert_eq!(
            input.submit(),
            Err(ValidationError::TooSmall { field: "people", min: 0 })
        );

        input.fill("Build API", "backend work", "lots");
        assert!(matches!(
            input.submit(),
            Err(ValidationError::NotANumber { .. })
        ));

        input.fill("Build API", "backend work", "99999999999");
        assert!(matches!(
            input.submit(),
            Err(ValidationError::TooLarge { .. })
        ));

        assert!(store.is_empty());
    }
}
