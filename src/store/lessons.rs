use chrono::NaiveDate;

use super::{new_id, Store};
use crate::error::StoreError;
use crate::model::{Attendance, Lesson, NewLesson};

impl Store {
    /// Lessons for a class, most recent date first. Same-day lessons come
    /// back in no particular order. Empty for an unknown class.
    pub fn lessons_by_class(&self, class_id: &str) -> Result<Vec<Lesson>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, class_id, date, topic, attendance_json
             FROM lessons
             WHERE class_id = ?
             ORDER BY date DESC",
        )?;
        let rows = stmt
            .query_map([class_id], |r| {
                Ok((
                    r.get::<_, String>(0)?,
                    r.get::<_, String>(1)?,
                    r.get::<_, String>(2)?,
                    r.get::<_, String>(3)?,
                    r.get::<_, String>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, class_id, date, topic, attendance_json)| {
                let attendance: Vec<Attendance> = serde_json::from_str(&attendance_json)?;
                Ok(Lesson {
                    id,
                    class_id,
                    date: NaiveDate::parse_from_str(&date, "%Y-%m-%d")?,
                    topic,
                    attendance,
                })
            })
            .collect()
    }

    /// Records a lesson. Attendance entries are stored as given; nothing
    /// checks that they reference enrolled students.
    pub fn create_lesson(&mut self, lesson: NewLesson) -> Result<Lesson, StoreError> {
        let id = new_id();
        let attendance_json = serde_json::to_string(&lesson.attendance)?;
        self.conn.execute(
            "INSERT INTO lessons(id, class_id, date, topic, attendance_json)
             VALUES(?, ?, ?, ?, ?)",
            (
                &id,
                &lesson.class_id,
                lesson.date.to_string(),
                &lesson.topic,
                &attendance_json,
            ),
        )?;
        Ok(Lesson {
            id,
            class_id: lesson.class_id,
            date: lesson.date,
            topic: lesson.topic,
            attendance: lesson.attendance,
        })
    }
}
