use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct JobConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl JobConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct JobStore {
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn find_job(&self, name: &str) -> Option<&JobConfig> {
        self.jobs.iter().find(|job| job.name == name)
    }

    pub fn upsert_job(&mut self, job: JobConfig) {
        match self.jobs.iter_mut().find(|existing| existing.name == job.name) {
            Some(existing) => *existing = job,
            None => self.jobs.push(job),
        }
    }

    pub fn remove_job(&mut self, name: &str) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|job| job.name != name);
        self.jobs.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(name: &str, description: &str) -> JobConfig {
        JobConfig {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_upsert_replaces_existing_job() {
        let mut store = JobStore::new();
        store.upsert_job(job("rollup-1", "first"));
        store.upsert_job(job("rollup-1", "updated"));

        assert_eq!(store.jobs.len(), 1);
        assert_eq!(store.find_job("rollup-1").unwrap().description, "updated");
    }

    #[test]
    fn test_remove_job() {
        let mut store = JobStore::new();
        store.upsert_job(job("rollup-1", ""));
        store.upsert_job(job("rollup-2", ""));

        assert!(store.remove_job("rollup-1"));
        assert!(!store.remove_job("rollup-1"));
        assert_eq!(store.jobs.len(), 1);
        assert!(store.find_job("rollup-2").is_some());
    }
}
