use chrono::NaiveDate;
use clinic::domain::doctor::{DoctorSortKey, NewDoctor, UpdateDoctor};
use clinic::domain::patient::{NewPatient, PatientSortKey, UpdatePatient};
use clinic::domain::types::{DoctorId, Name, PatientId, RowVersion, SpecializationId};
use clinic::pagination::{ListQuery, PageLimits, Pagination};
use clinic::repository::{
    DieselRepository, DoctorReader, DoctorWriter, PatientReader, PatientWriter, RepositoryError,
    SpecializationReader,
};

mod common;

fn name(value: &str) -> Name {
    Name::new(value).unwrap()
}

fn new_doctor(first: &str, last: &str, specialization: i32) -> NewDoctor {
    NewDoctor::new(
        name(first),
        name(last),
        SpecializationId::new(specialization).unwrap(),
    )
}

fn new_patient(first: &str, last: &str, born: (i32, u32, u32), doctor: DoctorId) -> NewPatient {
    NewPatient::new(
        name(first),
        name(last),
        NaiveDate::from_ymd_opt(born.0, born.1, born.2).unwrap(),
        doctor,
    )
}

fn doctor_query(sort: DoctorSortKey, page: i64, per_page: i64) -> ListQuery<DoctorSortKey> {
    ListQuery::new(sort, Pagination::new(page, per_page, PageLimits::default()))
}

fn patient_query(sort: PatientSortKey, page: i64, per_page: i64) -> ListQuery<PatientSortKey> {
    ListQuery::new(sort, Pagination::new(page, per_page, PageLimits::default()))
}

fn doctor_last_names(repo: &DieselRepository, query: &ListQuery<DoctorSortKey>) -> Vec<String> {
    repo.list_doctors(query)
        .unwrap()
        .into_iter()
        .map(|d| d.last_name.into_inner())
        .collect()
}

#[test]
fn test_doctor_repository_crud() {
    let test_db = common::TestDb::new("test_doctor_repository_crud.db");
    let repo = test_db.repo();

    let created = repo.create_doctor(&new_doctor("Ann", "Lee", 1)).unwrap();
    assert!(created.id.get() > 0);
    assert_eq!(created.version, RowVersion::default());

    let loaded = repo.get_doctor_by_id(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
    assert!(repo.doctor_exists(created.id).unwrap());

    let updates = UpdateDoctor::new(name("Anna"), name("Lee"), SpecializationId::new(2).unwrap());
    let updated = repo
        .update_doctor(created.id, created.version, &updates)
        .unwrap();
    assert_eq!(updated.first_name.as_str(), "Anna");
    assert_eq!(updated.specialization_id.get(), 2);
    assert_eq!(updated.version, created.version.next());

    let deleted = repo.delete_doctor(created.id).unwrap().unwrap();
    assert_eq!(deleted, updated);
    assert!(repo.get_doctor_by_id(created.id).unwrap().is_none());
    assert!(!repo.doctor_exists(created.id).unwrap());
}

#[test]
fn test_delete_missing_doctor_changes_nothing() {
    let test_db = common::TestDb::new("test_delete_missing_doctor_changes_nothing.db");
    let repo = test_db.repo();

    repo.create_doctor(&new_doctor("Ann", "Lee", 1)).unwrap();
    let before = repo.list_doctors(&doctor_query(DoctorSortKey::LastName, 1, 100)).unwrap();

    let deleted = repo.delete_doctor(DoctorId::new(9999).unwrap()).unwrap();
    assert!(deleted.is_none());

    let after = repo.list_doctors(&doctor_query(DoctorSortKey::LastName, 1, 100)).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_update_with_stale_version_conflicts() {
    let test_db = common::TestDb::new("test_update_with_stale_version_conflicts.db");
    let repo = test_db.repo();

    let created = repo.create_doctor(&new_doctor("Ann", "Lee", 1)).unwrap();
    let first = UpdateDoctor::new(name("Anna"), name("Lee"), SpecializationId::new(1).unwrap());
    repo.update_doctor(created.id, created.version, &first).unwrap();

    let second = UpdateDoctor::new(name("Annie"), name("Lee"), SpecializationId::new(1).unwrap());
    let result = repo.update_doctor(created.id, created.version, &second);
    assert!(matches!(result, Err(RepositoryError::ConcurrencyConflict(_))));

    let stored = repo.get_doctor_by_id(created.id).unwrap().unwrap();
    assert_eq!(stored.first_name.as_str(), "Anna");
}

#[test]
fn test_update_missing_doctor_conflicts() {
    let test_db = common::TestDb::new("test_update_missing_doctor_conflicts.db");
    let repo = test_db.repo();

    let updates = UpdateDoctor::new(name("Ann"), name("Lee"), SpecializationId::new(1).unwrap());
    let result = repo.update_doctor(DoctorId::new(42).unwrap(), RowVersion::default(), &updates);
    assert!(matches!(result, Err(RepositoryError::ConcurrencyConflict(_))));
}

#[test]
fn test_unknown_specialization_is_a_foreign_key_violation() {
    let test_db = common::TestDb::new("test_unknown_specialization_is_a_foreign_key_violation.db");
    let repo = test_db.repo();

    let result = repo.create_doctor(&new_doctor("Ann", "Lee", 99));
    assert!(matches!(result, Err(RepositoryError::ForeignKeyViolation(_))));
}

#[test]
fn test_deleting_referenced_doctor_is_a_foreign_key_violation() {
    let test_db =
        common::TestDb::new("test_deleting_referenced_doctor_is_a_foreign_key_violation.db");
    let repo = test_db.repo();

    let doctor = repo.create_doctor(&new_doctor("Ann", "Lee", 1)).unwrap();
    repo.create_patient(&new_patient("Tom", "Ray", (1990, 1, 1), doctor.id))
        .unwrap();

    let result = repo.delete_doctor(doctor.id);
    assert!(matches!(result, Err(RepositoryError::ForeignKeyViolation(_))));
    assert!(repo.doctor_exists(doctor.id).unwrap());
}

#[test]
fn test_list_doctors_sorts_by_each_key() {
    let test_db = common::TestDb::new("test_list_doctors_sorts_by_each_key.db");
    let repo = test_db.repo();

    // Surgeon(2), Cardiologist(3), Neurologist(4)
    repo.create_doctor(&new_doctor("Cid", "Adams", 2)).unwrap();
    repo.create_doctor(&new_doctor("Ann", "Cole", 4)).unwrap();
    repo.create_doctor(&new_doctor("Bea", "Burns", 3)).unwrap();

    assert_eq!(
        doctor_last_names(&repo, &doctor_query(DoctorSortKey::LastName, 1, 10)),
        vec!["Adams", "Burns", "Cole"]
    );
    assert_eq!(
        doctor_last_names(&repo, &doctor_query(DoctorSortKey::FirstName, 1, 10)),
        vec!["Cole", "Burns", "Adams"]
    );

    let by_specialization = repo
        .list_doctors(&doctor_query(DoctorSortKey::Specialization, 1, 10))
        .unwrap();
    let specializations: Vec<&str> = by_specialization
        .iter()
        .map(|d| d.specialization_name.as_str())
        .collect();
    assert_eq!(specializations, vec!["Cardiologist", "Neurologist", "Surgeon"]);
}

#[test]
fn test_list_doctors_breaks_ties_by_id() {
    let test_db = common::TestDb::new("test_list_doctors_breaks_ties_by_id.db");
    let repo = test_db.repo();

    let first = repo.create_doctor(&new_doctor("Zed", "Lee", 1)).unwrap();
    let second = repo.create_doctor(&new_doctor("Amy", "Lee", 1)).unwrap();

    let ids: Vec<DoctorId> = repo
        .list_doctors(&doctor_query(DoctorSortKey::LastName, 1, 10))
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn test_list_doctors_pages_concatenate_to_full_listing() {
    let test_db = common::TestDb::new("test_list_doctors_pages_concatenate_to_full_listing.db");
    let repo = test_db.repo();

    for (first, last) in [
        ("Ann", "Lee"),
        ("Bob", "Kim"),
        ("Cat", "Lee"),
        ("Dan", "Ito"),
        ("Eve", "Moe"),
    ] {
        repo.create_doctor(&new_doctor(first, last, 1)).unwrap();
    }

    let full = repo
        .list_doctors(&doctor_query(DoctorSortKey::LastName, 1, 100))
        .unwrap();
    assert_eq!(full.len(), 5);

    let mut paged = Vec::new();
    for page in 1..=3 {
        paged.extend(
            repo.list_doctors(&doctor_query(DoctorSortKey::LastName, page, 2))
                .unwrap(),
        );
    }
    assert_eq!(paged, full);

    let beyond = repo
        .list_doctors(&doctor_query(DoctorSortKey::LastName, 4, 2))
        .unwrap();
    assert!(beyond.is_empty());
}

#[test]
fn test_patient_repository_crud() {
    let test_db = common::TestDb::new("test_patient_repository_crud.db");
    let repo = test_db.repo();

    let doctor = repo.create_doctor(&new_doctor("Ann", "Lee", 1)).unwrap();
    let other = repo.create_doctor(&new_doctor("Bob", "Kim", 2)).unwrap();

    let created = repo
        .create_patient(&new_patient("Tom", "Ray", (1990, 5, 17), doctor.id))
        .unwrap();
    assert_eq!(repo.get_patient_by_id(created.id).unwrap().unwrap(), created);
    assert!(repo.patient_exists(created.id).unwrap());

    let updates = UpdatePatient::new(
        name("Tom"),
        name("Ray"),
        NaiveDate::from_ymd_opt(1991, 5, 17).unwrap(),
        other.id,
    );
    let updated = repo
        .update_patient(created.id, created.version, &updates)
        .unwrap();
    assert_eq!(updated.doctor_id, other.id);
    assert_eq!(updated.version, created.version.next());

    let stale = repo.update_patient(created.id, created.version, &updates);
    assert!(matches!(stale, Err(RepositoryError::ConcurrencyConflict(_))));

    assert_eq!(repo.delete_patient(created.id).unwrap().unwrap(), updated);
    assert!(repo.get_patient_by_id(created.id).unwrap().is_none());
    assert!(repo.delete_patient(PatientId::new(created.id.get()).unwrap()).unwrap().is_none());
}

#[test]
fn test_list_patients_includes_doctor_name_and_sorts() {
    let test_db = common::TestDb::new("test_list_patients_includes_doctor_name_and_sorts.db");
    let repo = test_db.repo();

    let doctor = repo.create_doctor(&new_doctor("Ann", "Lee", 1)).unwrap();
    repo.create_patient(&new_patient("Tom", "Ray", (1990, 5, 17), doctor.id))
        .unwrap();
    repo.create_patient(&new_patient("Amy", "Zane", (1985, 2, 1), doctor.id))
        .unwrap();
    repo.create_patient(&new_patient("Max", "Bell", (2001, 11, 30), doctor.id))
        .unwrap();

    let by_last: Vec<String> = repo
        .list_patients(&patient_query(PatientSortKey::LastName, 1, 10))
        .unwrap()
        .into_iter()
        .map(|p| p.last_name.into_inner())
        .collect();
    assert_eq!(by_last, vec!["Bell", "Ray", "Zane"]);

    let by_birth = repo
        .list_patients(&patient_query(PatientSortKey::DateOfBirth, 1, 10))
        .unwrap();
    let births: Vec<String> = by_birth
        .iter()
        .map(|p| p.date_of_birth.to_string())
        .collect();
    assert_eq!(births, vec!["1985-02-01", "1990-05-17", "2001-11-30"]);
    assert!(
        by_birth
            .iter()
            .all(|p| p.doctor_name.as_deref() == Some("Ann Lee"))
    );

    let by_first: Vec<String> = repo
        .list_patients(&patient_query(PatientSortKey::FirstName, 2, 2))
        .unwrap()
        .into_iter()
        .map(|p| p.first_name.into_inner())
        .collect();
    assert_eq!(by_first, vec!["Tom"]);
}

#[test]
fn test_unknown_doctor_is_a_foreign_key_violation() {
    let test_db = common::TestDb::new("test_unknown_doctor_is_a_foreign_key_violation.db");
    let repo = test_db.repo();

    let result = repo.create_patient(&new_patient(
        "Tom",
        "Ray",
        (1990, 1, 1),
        DoctorId::new(77).unwrap(),
    ));
    assert!(matches!(result, Err(RepositoryError::ForeignKeyViolation(_))));
}

#[test]
fn test_specialization_lookup() {
    let test_db = common::TestDb::new("test_specialization_lookup.db");
    let repo = test_db.repo();

    let surgeon = repo
        .get_specialization_by_id(SpecializationId::new(2).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(surgeon.name.as_str(), "Surgeon");
    assert!(
        repo.get_specialization_by_id(SpecializationId::new(99).unwrap())
            .unwrap()
            .is_none()
    );
    assert_eq!(repo.list_specializations().unwrap().len(), 5);
}
