use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::OptionalExtension;

use super::{new_id, Store};
use crate::error::StoreError;
use crate::model::{Activity, NewActivity, NewSubmission, Submission};

type SubmissionRow = (String, String, String, String, String, Option<f64>);

impl Store {
    /// Activities assigned to a class, in creation order. Empty for an
    /// unknown class.
    pub fn activities_by_class(&self, class_id: &str) -> Result<Vec<Activity>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, class_id, title, description, due_date, file_url
             FROM activities
             WHERE class_id = ?
             ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([class_id], |r| {
                Ok((
                    r.get::<_, String>(0)?,
                    r.get::<_, String>(1)?,
                    r.get::<_, String>(2)?,
                    r.get::<_, String>(3)?,
                    r.get::<_, String>(4)?,
                    r.get::<_, Option<String>>(5)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, class_id, title, description, due_date, file_url)| {
                Ok(Activity {
                    id,
                    class_id,
                    title,
                    description,
                    due_date: NaiveDate::parse_from_str(&due_date, "%Y-%m-%d")?,
                    file_url,
                })
            })
            .collect()
    }

    pub fn create_activity(&mut self, activity: NewActivity) -> Result<Activity, StoreError> {
        let id = new_id();
        self.conn.execute(
            "INSERT INTO activities(id, class_id, title, description, due_date, file_url)
             VALUES(?, ?, ?, ?, ?, ?)",
            (
                &id,
                &activity.class_id,
                &activity.title,
                &activity.description,
                activity.due_date.to_string(),
                &activity.file_url,
            ),
        )?;
        Ok(Activity {
            id,
            class_id: activity.class_id,
            title: activity.title,
            description: activity.description,
            due_date: activity.due_date,
            file_url: activity.file_url,
        })
    }

    /// All submissions handed in for an activity, in submission order.
    pub fn submissions_for_activity(&self, activity_id: &str) -> Result<Vec<Submission>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, activity_id, student_id, submitted_at, file_url, grade
             FROM submissions
             WHERE activity_id = ?
             ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([activity_id], submission_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(submission_from_row).collect()
    }

    /// The earliest submission a student handed in for an activity, if any.
    pub fn submission_for_activity(
        &self,
        activity_id: &str,
        student_id: &str,
    ) -> Result<Option<Submission>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, activity_id, student_id, submitted_at, file_url, grade
                 FROM submissions
                 WHERE activity_id = ? AND student_id = ?
                 ORDER BY rowid
                 LIMIT 1",
                (activity_id, student_id),
                submission_row,
            )
            .optional()?;
        match row {
            Some(row) => Ok(Some(submission_from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Records a submission. A second submission for the same activity and
    /// student is kept alongside the first; history accumulates and nothing
    /// is replaced.
    pub fn submit_activity(&mut self, submission: NewSubmission) -> Result<Submission, StoreError> {
        let id = new_id();
        self.conn.execute(
            "INSERT INTO submissions(id, activity_id, student_id, submitted_at, file_url, grade)
             VALUES(?, ?, ?, ?, ?, ?)",
            (
                &id,
                &submission.activity_id,
                &submission.student_id,
                submission.submitted_at.to_rfc3339(),
                &submission.file_url,
                submission.grade,
            ),
        )?;
        Ok(Submission {
            id,
            activity_id: submission.activity_id,
            student_id: submission.student_id,
            submitted_at: submission.submitted_at,
            file_url: submission.file_url,
            grade: submission.grade,
        })
    }

    /// Sets the grade on a submission and returns the updated record.
    /// `None` for an unknown submission id.
    pub fn grade_submission(
        &mut self,
        submission_id: &str,
        grade: f64,
    ) -> Result<Option<Submission>, StoreError> {
        let changed = self.conn.execute(
            "UPDATE submissions SET grade = ? WHERE id = ?",
            (grade, submission_id),
        )?;
        if changed == 0 {
            return Ok(None);
        }
        let row = self.conn.query_row(
            "SELECT id, activity_id, student_id, submitted_at, file_url, grade
             FROM submissions
             WHERE id = ?",
            [submission_id],
            submission_row,
        )?;
        Ok(Some(submission_from_row(row)?))
    }
}

fn submission_row(r: &rusqlite::Row<'_>) -> rusqlite::Result<SubmissionRow> {
    Ok((
        r.get(0)?,
        r.get(1)?,
        r.get(2)?,
        r.get(3)?,
        r.get(4)?,
        r.get(5)?,
    ))
}

fn submission_from_row(
    (id, activity_id, student_id, submitted_at, file_url, grade): SubmissionRow,
) -> Result<Submission, StoreError> {
    Ok(Submission {
        id,
        activity_id,
        student_id,
        submitted_at: DateTime::parse_from_rfc3339(&submitted_at)?.with_timezone(&Utc),
        file_url,
        grade,
    })
}
