//! Course catalog with per-course progress tracking

use super::fill;
use super::sections;
use super::ui::{self, Imports, Ui, Variant};
use crate::answers::AnswerSet;

pub const COMPONENT: &str = "Learning";

pub fn render(ui: &Ui, answers: &AnswerSet) -> String {
    let mut imports = Imports::new();
    imports.named("react", &["useState"]);

    let account = sections::account(ui, &mut imports, answers);
    let checkout = sections::checkout(ui, &mut imports, answers, "Unlock all courses", "");
    let upload = sections::upload(ui, &mut imports, answers, "assignments", "Submit an assignment");
    let courses = sections::records(
        ui,
        &mut imports,
        answers,
        "courses",
        "courses",
        "{ orderBy: ['title', 'asc'] }",
        "SAMPLE_COURSES",
    );

    let level = ui::badge(ui, &mut imports, "{course.level}", "");
    let bar = ui::progress(ui, &mut imports, "progress");
    let enroll = ui::button(
        ui,
        &mut imports,
        "{progress === 0 ? 'Start course' : progress >= 100 ? 'Review' : 'Continue'}",
        "onClick={() => onAdvance(course.id)}",
        Variant::Primary,
    );
    let course_card = ui::card(
        ui,
        &mut imports,
        "",
        Some("{course.title}"),
        Some("{course.instructor} · {course.lessons} lessons"),
        &fill(COURSE_BODY, &[("LEVEL", &level), ("PROGRESS", &bar), ("ACTION", &enroll)]),
    );
    let course = ui::component("CourseCard", "{ course, progress, onAdvance }", "", &course_card, false);

    let summary = ui::card(
        ui,
        &mut imports,
        "",
        Some("Your progress"),
        None,
        SUMMARY_BODY,
    );
    let upgrade_card = checkout
        .as_ref()
        .map(|section| {
            ui::card(
                ui,
                &mut imports,
                "",
                Some("All-access pass"),
                Some("Every course, every future release."),
                &section.jsx,
            )
        })
        .unwrap_or_default();
    let upload_card = upload
        .as_ref()
        .map(|section| ui::card(ui, &mut imports, "", Some("Assignments"), None, &section.jsx))
        .unwrap_or_default();

    let setup = sections::join(&[
        &sections::setup([&account, &checkout, &upload]),
        &courses,
        "const [progress, setProgress] = useState({});",
        "",
        PROGRESS_LOGIC,
    ]);
    let jsx = fill(
        PAGE_JSX,
        &[
            ("NAME", &ui::jsx_text(answers.project_name())),
            ("ACCOUNT", &sections::jsx_or(&account, "")),
            ("SUMMARY", &summary),
            ("UPGRADE_CARD", &upgrade_card),
            ("UPLOAD_CARD", &upload_card),
        ],
    );
    let page = ui::component(
        COMPONENT,
        "",
        &setup,
        &sections::protect(ui, &mut imports, answers, &jsx),
        true,
    );

    ui::module(ui, &imports, &[SAMPLE_DATA.to_string(), course, page])
}

const SAMPLE_DATA: &str = r#"const SAMPLE_COURSES = [
  { id: 'c1', title: 'React Fundamentals', instructor: 'Sarah Chen', lessons: 12, level: 'Beginner' },
  { id: 'c2', title: 'Advanced State Management', instructor: 'Marcus Lee', lessons: 8, level: 'Intermediate' },
  { id: 'c3', title: 'Building Design Systems', instructor: 'Priya Patel', lessons: 10, level: 'Intermediate' },
  { id: 'c4', title: 'Web Performance in Practice', instructor: 'Tom Novak', lessons: 6, level: 'Advanced' },
];"#;

const PROGRESS_LOGIC: &str = r#"const advance = (id) => {
  const course = courses.find((c) => c.id === id);
  const step = course ? 100 / course.lessons : 10;
  setProgress((current) => ({ ...current, [id]: Math.min(100, (current[id] || 0) + step) }));
};

const started = courses.filter((c) => (progress[c.id] || 0) > 0).length;
const completed = courses.filter((c) => (progress[c.id] || 0) >= 100).length;"#;

const COURSE_BODY: &str = r#"<div style={{ display: 'flex', flexDirection: 'column', gap: '0.75rem' }}>
  {{LEVEL}}
  {{PROGRESS}}
  <div style={{ display: 'flex', justifyContent: 'space-between', alignItems: 'center' }}>
    <span style={{ color: '#6b7280', fontSize: '0.875rem' }}>{Math.round(progress)}% complete</span>
    {{ACTION}}
  </div>
</div>"#;

const SUMMARY_BODY: &str = r#"<div style={{ display: 'flex', gap: '2rem' }}>
  <div>
    <div style={{ fontSize: '2rem', fontWeight: 'bold' }}>{started}</div>
    <div style={{ color: '#6b7280', fontSize: '0.875rem' }}>In progress</div>
  </div>
  <div>
    <div style={{ fontSize: '2rem', fontWeight: 'bold' }}>{completed}</div>
    <div style={{ color: '#6b7280', fontSize: '0.875rem' }}>Completed</div>
  </div>
  <div>
    <div style={{ fontSize: '2rem', fontWeight: 'bold' }}>{courses.length}</div>
    <div style={{ color: '#6b7280', fontSize: '0.875rem' }}>Available</div>
  </div>
</div>"#;

const PAGE_JSX: &str = r#"<div style={{ minHeight: '100vh', background: '#f9fafb' }}>
  <header style={{ background: 'white', borderBottom: '1px solid #e5e7eb', padding: '1rem 2rem', display: 'flex', justifyContent: 'space-between', alignItems: 'center' }}>
    <h1 style={{ fontSize: '1.5rem', fontWeight: 'bold' }}>{{NAME}} Academy</h1>
    {{ACCOUNT}}
  </header>

  <div style={{ maxWidth: '1200px', margin: '0 auto', padding: '2rem', display: 'flex', flexDirection: 'column', gap: '2rem' }}>
    {{SUMMARY}}
    {{UPGRADE_CARD}}

    <div style={{ display: 'grid', gridTemplateColumns: 'repeat(auto-fill, minmax(280px, 1fr))', gap: '1.5rem' }}>
      {courses.map((course) => (
        <CourseCard key={course.id} course={course} progress={progress[course.id] || 0} onAdvance={advance} />
      ))}
    </div>

    {{UPLOAD_CARD}}
  </div>
</div>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Answers, CssFramework, FirebaseService, Framework, Template};

    fn render_with(css: CssFramework, payments: bool, services: &[FirebaseService]) -> String {
        let mut answers = Answers::new("Skill Up", Framework::Vite, Template::Learning, css);
        answers.include_payments = payments;
        answers.firebase_services.extend(services.iter().copied());
        let answers = answers.finalize().unwrap();
        render(&Ui::new(&answers), &answers)
    }

    #[test]
    fn test_catalog_without_services() {
        let page = render_with(CssFramework::BootstrapCdn, false, &[]);
        assert!(page.contains("const courses = SAMPLE_COURSES;"));
        assert!(!page.contains("startCheckout"));
        assert!(!page.contains("useStorage"));
        assert!(page.contains("width: `${progress}%`"));
    }

    #[test]
    fn test_payments_unlock_card() {
        let page = render_with(CssFramework::TailwindShadcn, true, &[FirebaseService::Storage]);
        assert!(page.contains("All-access pass"));
        assert!(page.contains("startCheckout()"));
        assert!(page.contains("<Progress value={progress} />"));
        assert!(page.contains("uploadFile(file, `assignments/"));
    }
}
