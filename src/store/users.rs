use rusqlite::OptionalExtension;

use super::{new_id, Store};
use crate::error::StoreError;
use crate::model::{Manager, Role, Student, Teacher, User};

type UserRow = (String, String, String, String);

impl Store {
    /// Looks up an account by username. Any password is accepted; this is a
    /// mock portal, and callers must not treat login as an authentication
    /// boundary.
    pub fn login(&self, username: &str, _password: &str) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> = self
            .conn
            .query_row(
                "SELECT id, name, username, role FROM users WHERE username = ?",
                [username],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
            )
            .optional()?;
        match row {
            Some(row) => Ok(Some(self.assemble_user(row)?)),
            None => Ok(None),
        }
    }

    /// Every account, in creation order.
    pub fn all_users(&self) -> Result<Vec<User>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, username, role FROM users ORDER BY rowid")?;
        let rows = stmt
            .query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)))?
            .collect::<Result<Vec<UserRow>, _>>()?;
        rows.into_iter().map(|row| self.assemble_user(row)).collect()
    }

    /// Creates an account. Usernames are unique (exact, case-sensitive
    /// match); a clash is the store's one hard failure.
    pub fn create_user(
        &mut self,
        name: &str,
        username: &str,
        role: Role,
    ) -> Result<User, StoreError> {
        let taken: Option<i64> = self
            .conn
            .query_row("SELECT 1 FROM users WHERE username = ?", [username], |r| {
                r.get(0)
            })
            .optional()?;
        if taken.is_some() {
            return Err(StoreError::DuplicateUsername(username.to_string()));
        }

        let id = new_id();
        self.conn.execute(
            "INSERT INTO users(id, name, username, role) VALUES(?, ?, ?, ?)",
            (&id, name, username, role.as_str()),
        )?;

        let name = name.to_string();
        let username = username.to_string();
        Ok(match role {
            Role::Teacher => User::Teacher(Teacher { id, name, username }),
            Role::Manager => User::Manager(Manager { id, name, username }),
            Role::Student => User::Student(Student {
                id,
                name,
                username,
                class_ids: Vec::new(),
            }),
        })
    }

    /// Every student account, in creation order.
    pub fn all_students(&self) -> Result<Vec<Student>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, username FROM users WHERE role = 'STUDENT' ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)))?
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

    pub(crate) fn class_ids_of(&self, student_id: &str) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT class_id FROM enrollments WHERE student_id = ? ORDER BY rowid")?;
        let ids = stmt
            .query_map([student_id], |r| r.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(ids)
    }

    fn assemble_user(&self, (id, name, username, role): UserRow) -> Result<User, StoreError> {
        match Role::from_tag(&role) {
            Some(Role::Teacher) => Ok(User::Teacher(Teacher { id, name, username })),
            Some(Role::Manager) => Ok(User::Manager(Manager { id, name, username })),
            Some(Role::Student) => Ok(User::Student(Student {
                class_ids: self.class_ids_of(&id)?,
                id,
                name,
                username,
            })),
            None => Err(StoreError::Db(rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                format!("unknown role tag '{role}'").into(),
            ))),
        }
    }
}
