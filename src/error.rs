use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("Please enter a topic name")]
    EmptyTopicName,
    #[error("Please select a subject before adding a topic")]
    NoSubjectSelected,
    #[error("Please fill in all fields")]
    MissingAssignmentFields,
    #[error("subject {0} not found")]
    SubjectNotFound(u32),
    #[error("topic {topic_id} not found in subject {subject_id}")]
    TopicNotFound { subject_id: u32, topic_id: i64 },
}

impl DashboardError {
    /// Validation failures are shown to the user; lookup misses are faults.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DashboardError::EmptyTopicName
                | DashboardError::NoSubjectSelected
                | DashboardError::MissingAssignmentFields
        )
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
