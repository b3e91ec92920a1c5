use rusqlite::OptionalExtension;

use super::{new_id, Store};
use crate::error::StoreError;
use crate::model::{Class, Student};

type ClassRow = (String, String, String);

impl Store {
    /// Classes owned by a teacher, in creation order.
    pub fn classes_by_teacher(&self, teacher_id: &str) -> Result<Vec<Class>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, teacher_id FROM classes WHERE teacher_id = ? ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([teacher_id], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)))?
            .collect::<Result<Vec<ClassRow>, _>>()?;
        rows.into_iter().map(|row| self.assemble_class(row)).collect()
    }

    /// Creates a class with an empty roster. The teacher id is taken as
    /// given; nothing checks that it names an existing account.
    pub fn create_class(&mut self, name: &str, teacher_id: &str) -> Result<Class, StoreError> {
        let id = new_id();
        self.conn.execute(
            "INSERT INTO classes(id, name, teacher_id) VALUES(?, ?, ?)",
            (&id, name, teacher_id),
        )?;
        Ok(Class {
            id,
            name: name.to_string(),
            teacher_id: teacher_id.to_string(),
            student_ids: Vec::new(),
        })
    }

    /// Renames a class. `None` for an unknown id.
    pub fn update_class(&mut self, class_id: &str, name: &str) -> Result<Option<Class>, StoreError> {
        let changed = self.conn.execute(
            "UPDATE classes SET name = ? WHERE id = ?",
            (name, class_id),
        )?;
        if changed == 0 {
            return Ok(None);
        }
        let row: ClassRow = self.conn.query_row(
            "SELECT id, name, teacher_id FROM classes WHERE id = ?",
            [class_id],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )?;
        Ok(Some(self.assemble_class(row)?))
    }

    /// Deletes a class and strips it from every student's enrollment. The
    /// class's lessons, activities, and submissions are left in place as
    /// orphaned history. Returns false if the id was unknown.
    pub fn delete_class(&mut self, class_id: &str) -> Result<bool, StoreError> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM enrollments WHERE class_id = ?", [class_id])?;
        let removed = tx.execute("DELETE FROM classes WHERE id = ?", [class_id])?;
        tx.commit()?;
        Ok(removed > 0)
    }

    /// The class's roster resolved to full student records, in account
    /// creation order. Empty for an unknown class. Enrollment rows that do
    /// not name a student account resolve to nothing.
    pub fn students_in_class(&self, class_id: &str) -> Result<Vec<Student>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT u.id, u.name, u.username
             FROM users u
             JOIN enrollments e ON e.student_id = u.id
             WHERE e.class_id = ? AND u.role = 'STUDENT'
             ORDER BY u.rowid",
        )?;
        let rows = stmt
            .query_map([class_id], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)))?
            .collect::<Result<Vec<(String, String, String)>, _>>()?;
        rows.into_iter()
            .map(|(id, name, username)| {
                Ok(Student {
                    class_ids: self.class_ids_of(&id)?,
                    id,
                    name,
                    username,
                })
            })
            .collect()
    }

    /// Enrolls a student. False if the class is unknown or the student is
    /// already on the roster. The student id itself is taken as given.
    pub fn add_student_to_class(
        &mut self,
        class_id: &str,
        student_id: &str,
    ) -> Result<bool, StoreError> {
        if !self.class_exists(class_id)? {
            return Ok(false);
        }
        let enrolled: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM enrollments WHERE class_id = ? AND student_id = ?",
                (class_id, student_id),
                |r| r.get(0),
            )
            .optional()?;
        if enrolled.is_some() {
            return Ok(false);
        }
        self.conn.execute(
            "INSERT INTO enrollments(class_id, student_id) VALUES(?, ?)",
            (class_id, student_id),
        )?;
        Ok(true)
    }

    /// Drops a student from the roster. False only for an unknown class;
    /// removing a student who was never enrolled still reports success.
    pub fn remove_student_from_class(
        &mut self,
        class_id: &str,
        student_id: &str,
    ) -> Result<bool, StoreError> {
        if !self.class_exists(class_id)? {
            return Ok(false);
        }
        self.conn.execute(
            "DELETE FROM enrollments WHERE class_id = ? AND student_id = ?",
            (class_id, student_id),
        )?;
        Ok(true)
    }

    /// The classes a student is enrolled in, in class creation order.
    /// Empty for an unknown student or one with no enrollments.
    pub fn classes_by_student(&self, student_id: &str) -> Result<Vec<Class>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT c.id, c.name, c.teacher_id
             FROM classes c
             JOIN enrollments e ON e.class_id = c.id
             WHERE e.student_id = ?
             ORDER BY c.rowid",
        )?;
        let rows = stmt
            .query_map([student_id], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)))?
            .collect::<Result<Vec<ClassRow>, _>>()?;
        rows.into_iter().map(|row| self.assemble_class(row)).collect()
    }

    fn class_exists(&self, class_id: &str) -> Result<bool, StoreError> {
        let found: Option<i64> = self
            .conn
            .query_row("SELECT 1 FROM classes WHERE id = ?", [class_id], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(found.is_some())
    }

    fn roster_of(&self, class_id: &str) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT student_id FROM enrollments WHERE class_id = ? ORDER BY rowid")?;
        let ids = stmt
            .query_map([class_id], |r| r.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(ids)
    }

    fn assemble_class(&self, (id, name, teacher_id): ClassRow) -> Result<Class, StoreError> {
        Ok(Class {
            student_ids: self.roster_of(&id)?,
            id,
            name,
            teacher_id,
        })
    }
}
