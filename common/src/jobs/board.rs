use crate::model::job::{Job, JobId, JobStatus};
use crate::requests::JobEdit;

use super::pagination::{Pagination, PagerControl};

/// Orders jobs newest first by `date_applied`. Undated jobs go last, and jobs
/// with equal dates keep their fetched order.
pub fn sort_by_date_applied(jobs: &mut [Job]) {
    // `None < Some(_)`, so reversing the comparison puts undated jobs at the end.
    jobs.sort_by(|a, b| b.date_applied.cmp(&a.date_applied));
}

/// Unsaved edit of one row: the editable subset of a `Job`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: JobId,
    pub status: JobStatus,
    pub notes: String,
}

impl EditDraft {
    pub fn payload(&self) -> JobEdit {
        JobEdit {
            status: self.status,
            notes: self.notes.clone(),
        }
    }
}

/// Local mirror of the server's job list plus the per-row edit mode and the
/// pagination toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobBoard {
    jobs: Vec<Job>,
    editing: Option<EditDraft>,
    pagination: Pagination,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the mirror with a freshly fetched list, sorted by date.
    pub fn load(&mut self, mut fetched: Vec<Job>) {
        sort_by_date_applied(&mut fetched);
        self.jobs = fetched;
    }

    pub fn clear(&mut self) {
        self.jobs.clear();
        self.editing = None;
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Adds a just-created job at the front. The list is not re-sorted.
    pub fn prepend(&mut self, job: Job) {
        self.jobs.insert(0, job);
    }

    /// Swaps in the server's copy of a job, matched by id. Returns whether a
    /// row was replaced.
    pub fn replace(&mut self, updated: Job) -> bool {
        match self.jobs.iter_mut().find(|job| job.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Drops the job with `id` after the server confirmed the delete.
    pub fn remove(&mut self, id: JobId) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|job| job.id != id);
        if self.editing.as_ref().is_some_and(|draft| draft.id == id) {
            self.editing = None;
        }
        self.jobs.len() != before
    }

    /// Puts row `id` in edit mode, seeded from its current status and notes.
    ///
    /// Any draft for another row is discarded without warning.
    pub fn start_edit(&mut self, id: JobId) -> bool {
        let Some(job) = self.get(id) else {
            return false;
        };
        self.editing = Some(EditDraft {
            id,
            status: job.status,
            notes: job.notes.clone().unwrap_or_default(),
        });
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: JobId) -> bool {
        self.editing.as_ref().is_some_and(|draft| draft.id == id)
    }

    pub fn set_edit_status(&mut self, status: JobStatus) {
        if let Some(draft) = self.editing.as_mut() {
            draft.status = status;
        }
    }

    pub fn set_edit_notes(&mut self, notes: String) {
        if let Some(draft) = self.editing.as_mut() {
            draft.notes = notes;
        }
    }

    /// Applies a confirmed update: the canonical record replaces the local
    /// copy and edit mode ends.
    pub fn apply_update(&mut self, updated: Job) -> bool {
        let replaced = self.replace(updated);
        self.editing = None;
        replaced
    }

    pub fn toggle_show_all(&mut self) {
        self.pagination.toggle();
    }

    pub fn show_all(&self) -> bool {
        self.pagination.show_all()
    }

    /// Rows currently on screen.
    pub fn visible(&self) -> &[Job] {
        self.pagination.visible(&self.jobs)
    }

    pub fn pager_control(&self) -> Option<PagerControl> {
        self.pagination.control(self.jobs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn job(id: JobId, date: Option<(i32, u32, u32)>) -> Job {
        Job {
            id,
            title: format!("Job {id}"),
            company: "Acme".to_string(),
            location: None,
            status: JobStatus::Applied,
            date_applied: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            notes: None,
            user_id: Some(1),
        }
    }

    fn ids(board: &JobBoard) -> Vec<JobId> {
        board.jobs().iter().map(|job| job.id).collect()
    }

    #[test]
    fn load_sorts_newest_first_with_undated_last() {
        let mut board = JobBoard::new();
        board.load(vec![
            job(1, Some((2024, 1, 10))),
            job(2, None),
            job(3, Some((2024, 5, 2))),
            job(4, Some((2023, 12, 31))),
            job(5, None),
        ]);

        assert_eq!(ids(&board), vec![3, 1, 4, 2, 5]);
        for pair in board.jobs().windows(2) {
            assert!(pair[0].date_applied >= pair[1].date_applied);
        }
    }

    #[test]
    fn load_replaces_previous_contents() {
        let mut board = JobBoard::new();
        board.load(vec![job(1, None), job(2, None)]);
        board.prepend(job(9, None));
        board.load(vec![job(3, Some((2024, 1, 1)))]);
        assert_eq!(ids(&board), vec![3]);
    }

    #[test]
    fn created_job_goes_first_without_resorting() {
        let mut board = JobBoard::new();
        board.load(vec![
            job(1, Some((2024, 1, 10))),
            job(2, Some((2024, 3, 1))),
            job(3, Some((2023, 6, 1))),
        ]);

        board.prepend(job(4, None));

        assert_eq!(ids(&board), vec![4, 2, 1, 3]);
        let rest = &board.jobs()[1..];
        for pair in rest.windows(2) {
            assert!(pair[0].date_applied >= pair[1].date_applied);
        }
    }

    #[test]
    fn remove_filters_by_id() {
        let mut board = JobBoard::new();
        board.load(vec![job(1, None), job(2, None), job(3, None)]);

        assert!(board.remove(2));
        assert_eq!(ids(&board), vec![1, 3]);
        assert!(!board.remove(2));
        assert_eq!(ids(&board), vec![1, 3]);
    }

    #[test]
    fn apply_update_replaces_one_row_and_exits_edit_mode() {
        let mut board = JobBoard::new();
        board.load(vec![
            job(1, Some((2024, 2, 1))),
            job(2, Some((2024, 1, 1))),
        ]);
        let untouched = board.get(2).cloned();

        assert!(board.start_edit(1));
        board.set_edit_status(JobStatus::Offer);
        board.set_edit_notes("call back".to_string());
        let draft = board.editing().cloned().unwrap();
        assert_eq!(
            draft.payload(),
            JobEdit {
                status: JobStatus::Offer,
                notes: "call back".to_string()
            }
        );

        let mut canonical = job(1, Some((2024, 2, 1)));
        canonical.status = JobStatus::Offer;
        canonical.notes = Some("call back".to_string());
        assert!(board.apply_update(canonical.clone()));

        assert_eq!(board.get(1), Some(&canonical));
        assert_eq!(board.get(2).cloned(), untouched);
        assert!(board.editing().is_none());
        assert_eq!(ids(&board), vec![1, 2]);
    }

    #[test]
    fn editing_another_row_abandons_the_first_draft() {
        let mut board = JobBoard::new();
        let mut second = job(2, None);
        second.notes = Some("existing".to_string());
        second.status = JobStatus::Interview;
        board.load(vec![job(1, None), second]);

        board.start_edit(1);
        board.set_edit_notes("unsaved".to_string());
        board.start_edit(2);

        let draft = board.editing().unwrap();
        assert_eq!(draft.id, 2);
        assert_eq!(draft.status, JobStatus::Interview);
        assert_eq!(draft.notes, "existing");
        assert!(!board.is_editing(1));
        assert!(board.get(1).unwrap().notes.is_none());
    }

    #[test]
    fn start_edit_on_unknown_row_is_ignored() {
        let mut board = JobBoard::new();
        board.load(vec![job(1, None)]);
        assert!(!board.start_edit(42));
        assert!(board.editing().is_none());
    }

    #[test]
    fn pagination_follows_the_board() {
        let mut board = JobBoard::new();
        board.load((1..=6).map(|id| job(id, Some((2024, 1, id as u32)))).collect());

        assert_eq!(board.visible().len(), 5);
        assert_eq!(board.visible()[0].id, 6);
        assert_eq!(board.pager_control(), Some(PagerControl::ViewMore));

        board.toggle_show_all();
        assert_eq!(board.visible().len(), 6);
        assert_eq!(board.pager_control(), Some(PagerControl::ViewLess));
    }
}
