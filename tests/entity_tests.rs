use coursework::{Graded, Lecturer, Mentor, Reviewer, Student};

fn rated_lecturer(grades: &[i32]) -> Lecturer {
    let mut lecturer = Lecturer::new("Some", "Buddy");
    lecturer.attach_course("Python");
    let mut student = Student::new("Ruoy", "Eman", "M");
    student.enroll("Python");

    for grade in grades {
        student
            .rate_lecture(&mut lecturer, "Python", *grade)
            .expect("eligible rating");
    }
    lecturer
}

fn graded_student(name: &str, grades: &[i32]) -> Student {
    let mut student = Student::new(name, "Eman", "M");
    student.enroll("Python");
    let mut reviewer = Reviewer::new("Some", "Buddy");
    reviewer.attach_course("Python");

    for grade in grades {
        reviewer
            .rate_hw(&mut student, "Python", *grade)
            .expect("eligible rating");
    }
    student
}

#[test]
fn lecturers_compare_by_average_lecture_grade() {
    let l1 = rated_lecturer(&[10, 9]);
    let l2 = rated_lecturer(&[8, 9]);

    assert_eq!(l1.avg_lectures(), 9.5);
    assert_eq!(l2.avg_lectures(), 8.5);
    assert!(l1 > l2);
    assert!(l2 < l1);
    assert!(l1 != l2);
}

#[test]
fn students_with_equal_average_are_equal() {
    let s1 = graded_student("Ruoy", &[9]);
    let s2 = graded_student("Anna", &[10, 8]);

    assert_eq!(s1.avg_hw(), 9.0);
    assert_eq!(s2.avg_hw(), 9.0);
    assert!(s1 == s2);
    assert!(!(s1 < s2));
    assert!(!(s2 < s1));
}

#[test]
fn ungraded_entities_compare_equal() {
    assert!(Student::new("A", "B", "F") == Student::new("C", "D", "M"));
    assert!(Lecturer::new("A", "B") == Lecturer::new("C", "D"));
}

#[test]
fn student_display_lists_courses_and_average() {
    let mut student = graded_student("Ruoy", &[10]);
    student.enroll("Git ");
    student.finish_course("Введение в программирование");

    assert_eq!(
        student.to_string(),
        "Имя: Ruoy\n\
         Фамилия: Eman\n\
         Средняя оценка за домашние задания: 10.0\n\
         Курсы в процессе изучения: Python, Git\n\
         Завершенные курсы: Введение в программирование"
    );
}

#[test]
fn student_display_without_courses_has_empty_lists() {
    let student = Student::new("Anna", "Smirnova", "F");

    assert_eq!(
        student.to_string(),
        "Имя: Anna\n\
         Фамилия: Smirnova\n\
         Средняя оценка за домашние задания: 0.0\n\
         Курсы в процессе изучения: \n\
         Завершенные курсы: "
    );
}

#[test]
fn lecturer_display_rounds_to_one_decimal() {
    let lecturer = rated_lecturer(&[10, 9, 9]);
    insta::assert_snapshot!(lecturer.to_string(), @r"
    Имя: Some
    Фамилия: Buddy
    Средняя оценка за лекции: 9.3
    ");
}

#[test]
fn reviewer_display_shows_identity_only() {
    let reviewer = Reviewer::from(
        Mentor::builder()
            .name("Some")
            .surname("Buddy")
            .courses_attached(vec!["Python".into(), "Git".into()])
            .build(),
    );

    assert_eq!(reviewer.to_string(), "Имя: Some\nФамилия: Buddy");
}

#[test]
fn graded_trait_matches_inherent_averages() {
    let student = graded_student("Ruoy", &[10, 7]);
    let lecturer = rated_lecturer(&[6, 9]);

    assert_eq!(Graded::average(&student), student.avg_hw());
    assert_eq!(student.average_for("Python"), student.avg_hw_for("Python"));
    assert_eq!(Graded::average(&lecturer), lecturer.avg_lectures());
    assert_eq!(lecturer.average_for("Git"), 0.0);
    assert_eq!(lecturer.full_name(), "Some Buddy");
}

#[test]
fn mentor_tracks_attached_courses_in_order() {
    let mut mentor = Mentor::new("Ivan", "Ivanov");
    mentor.attach_course("Python");
    mentor.attach_course("Git");

    assert_eq!(mentor.courses_attached(), ["Python", "Git"]);
    assert!(mentor.is_attached_to("Git"));
    assert!(!mentor.is_attached_to("Rust"));

    let lecturer = Lecturer::from(mentor);
    assert_eq!(lecturer.name(), "Ivan");
    assert_eq!(lecturer.courses_attached().len(), 2);
}

#[test]
fn attachment_check_matches_names_exactly() {
    let mut mentor = Mentor::new("Some", "Buddy");
    mentor.attach_course("Git ");

    assert!(mentor.is_attached_to("Git "));
    assert!(!mentor.is_attached_to("Git"));
}
