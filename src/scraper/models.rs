use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// job
//  ├── id
//  ├── title
//  ├── uri
//  ├── employmentType
//  ├── postedDate
//  ├── location
//  └── company
//       ├── logoUri
//       └── name

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub uri: String,
    pub employment_type: JobType,
    pub posted_date: DateTime<Utc>,
    pub location: String,
    pub company: Company,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub logo_uri: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JobType {
    #[serde(rename = "Full Time")]
    FullTime,
    #[serde(rename = "Part Time")]
    PartTime,
}

/// JSON wrapper the upstream returns around the listing markup.
#[derive(Debug, Deserialize)]
pub struct ListingsEnvelope {
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub success: bool,
    pub jobs: Vec<Job>,
}
