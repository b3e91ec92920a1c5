use classportal::model::{Role, User};
use classportal::{Store, StoreError};

#[test]
fn create_user_rejects_duplicate_username() -> anyhow::Result<()> {
    let mut store = Store::open()?;
    store.create_user("Prof. Ana Silva", "ana.silva", Role::Teacher)?;

    let err = store
        .create_user("Outra Ana", "ana.silva", Role::Student)
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateUsername(ref u) if u == "ana.silva"));

    // Exact-match uniqueness: a different case is a different username.
    let upper = store.create_user("Ana Maiúscula", "Ana.Silva", Role::Student)?;
    assert_eq!(upper.username(), "Ana.Silva");

    let users = store.all_users()?;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].role(), Role::Teacher);
    Ok(())
}

#[test]
fn created_student_starts_with_no_classes() -> anyhow::Result<()> {
    let mut store = Store::open()?;
    let user = store.create_user("Bruno Costa", "bruno.costa", Role::Student)?;
    let student = user.as_student().expect("student variant");
    assert!(student.class_ids.is_empty());
    assert!(!student.id.is_empty());
    Ok(())
}

#[test]
fn login_ignores_password_and_misses_softly() -> anyhow::Result<()> {
    let mut store = Store::open()?;
    store.create_user("Gestor Carlos", "carlos.gestor", Role::Manager)?;

    let first = store.login("carlos.gestor", "hunter2")?;
    let second = store.login("carlos.gestor", "")?;
    assert!(matches!(first, Some(User::Manager(_))));
    assert_eq!(first.as_ref().map(User::id), second.as_ref().map(User::id));

    assert!(store.login("nobody", "hunter2")?.is_none());
    Ok(())
}

#[test]
fn all_students_filters_by_role() -> anyhow::Result<()> {
    let mut store = Store::open()?;
    store.create_user("Prof. Ana Silva", "ana.silva", Role::Teacher)?;
    store.create_user("Bruno Costa", "bruno.costa", Role::Student)?;
    store.create_user("Carla Dias", "carla.dias", Role::Student)?;

    let students = store.all_students()?;
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].username, "bruno.costa");
    assert_eq!(students[1].username, "carla.dias");
    Ok(())
}
