//! Kanban board with three task columns

use super::fill;
use super::sections;
use super::ui::{self, Imports, Ui, Variant};
use crate::answers::{AnswerSet, FirebaseService};

pub const COMPONENT: &str = "ProjectBoard";

pub fn render(ui: &Ui, answers: &AnswerSet) -> String {
    let mut imports = Imports::new();
    imports.named("react", &["useState"]);
    let database = answers.has_firebase(FirebaseService::Database);

    let account = sections::account(ui, &mut imports, answers);
    let upload = sections::upload(ui, &mut imports, answers, "attachments", "Attach a file");

    // Tasks move between columns, so the Firestore board has no sample fallback
    let store = if database {
        imports.named(&ui.src_import("hooks/useFirestore"), &["useCollection", "useFirestore"]);
        FIRESTORE_TASKS
    } else {
        LOCAL_TASKS
    };

    let title = ui::input(
        ui,
        &mut imports,
        "placeholder=\"New task title\" value={title} onChange={(e) => setTitle(e.target.value)}",
    );
    let add = ui::button(ui, &mut imports, "Add Task", "type=\"submit\" disabled={!title.trim()}", Variant::Primary);
    let back = ui::button(
        ui,
        &mut imports,
        "←",
        "onClick={() => onMove(task, -1)} disabled={columnIndex === 0} aria-label=\"Move left\"",
        Variant::Ghost,
    );
    let forward = ui::button(
        ui,
        &mut imports,
        "→",
        "onClick={() => onMove(task, 1)} disabled={columnIndex === COLUMNS.length - 1} aria-label=\"Move right\"",
        Variant::Ghost,
    );
    let priority = ui::badge(ui, &mut imports, "{task.priority}", "");
    let task_card = ui::card(
        ui,
        &mut imports,
        "",
        None,
        None,
        &fill(TASK_BODY, &[("PRIORITY", &priority), ("BACK", &back), ("FORWARD", &forward)]),
    );
    let task = ui::component("TaskCard", "{ task, columnIndex, onMove }", "", &task_card, false);

    let count = ui::badge(ui, &mut imports, "{tasks.length}", "");
    let column = ui::component(
        "Column",
        "{ column, columnIndex, tasks, onMove }",
        "",
        &fill(COLUMN_JSX, &[("COUNT", &count)]),
        false,
    );

    let upload_card = upload
        .as_ref()
        .map(|section| ui::card(ui, &mut imports, "", Some("Attachments"), None, &section.jsx))
        .unwrap_or_default();

    let setup = sections::join(&[
        &sections::setup([&account, &upload]),
        "const [title, setTitle] = useState('');",
        store,
        "",
        BOARD_LOGIC,
    ]);
    let jsx = fill(
        PAGE_JSX,
        &[
            ("NAME", &ui::jsx_text(answers.project_name())),
            ("ACCOUNT", &sections::jsx_or(&account, "")),
            ("TITLE", &title),
            ("ADD", &add),
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

    ui::module(ui, &imports, &[SAMPLE_DATA.to_string(), task, column, page])
}

const SAMPLE_DATA: &str = r#"const COLUMNS = [
  { id: 'todo', title: 'To Do', color: '#6b7280' },
  { id: 'in-progress', title: 'In Progress', color: '#2563eb' },
  { id: 'done', title: 'Done', color: '#059669' },
];

const SAMPLE_TASKS = [
  { id: 't1', title: 'Design the onboarding flow', status: 'todo', priority: 'high' },
  { id: 't2', title: 'Set up CI pipeline', status: 'in-progress', priority: 'medium' },
  { id: 't3', title: 'Write API documentation', status: 'todo', priority: 'low' },
  { id: 't4', title: 'Launch beta', status: 'done', priority: 'high' },
];"#;

const LOCAL_TASKS: &str = r#"const [tasks, setTasks] = useState(SAMPLE_TASKS);

const createTask = async (task) => setTasks((current) => [...current, { ...task, id: `t${Date.now()}` }]);
const updateTask = async (id, changes) =>
  setTasks((current) => current.map((t) => (t.id === id ? { ...t, ...changes } : t)));"#;

const FIRESTORE_TASKS: &str = r#"const { data: tasks } = useCollection('tasks', { orderBy: ['createdAt', 'asc'] });
const { addDocument: createTask, updateDocument: updateTask } = useFirestore('tasks');"#;

const BOARD_LOGIC: &str = r#"const handleAdd = async (e) => {
  e.preventDefault();
  await createTask({ title: title.trim(), status: 'todo', priority: 'medium' });
  setTitle('');
};

const moveTask = (task, step) => {
  const index = COLUMNS.findIndex((c) => c.id === task.status);
  const next = COLUMNS[index + step];
  if (next) {
    updateTask(task.id, { status: next.id });
  }
};"#;

const TASK_BODY: &str = r#"<div style={{ display: 'flex', flexDirection: 'column', gap: '0.5rem' }}>
  <div style={{ fontWeight: 500 }}>{task.title}</div>
  <div style={{ display: 'flex', justifyContent: 'space-between', alignItems: 'center' }}>
    {{PRIORITY}}
    <div style={{ display: 'flex', gap: '0.25rem' }}>
      {{BACK}}
      {{FORWARD}}
    </div>
  </div>
</div>"#;

const COLUMN_JSX: &str = r#"<section style={{ background: '#f3f4f6', borderRadius: '0.5rem', padding: '1rem', minHeight: '300px', display: 'flex', flexDirection: 'column', gap: '0.75rem' }}>
  <div style={{ display: 'flex', justifyContent: 'space-between', alignItems: 'center', borderBottom: `3px solid ${column.color}`, paddingBottom: '0.5rem' }}>
    <h2 style={{ fontSize: '1rem', fontWeight: 600 }}>{column.title}</h2>
    {{COUNT}}
  </div>
  {tasks.map((task) => (
    <TaskCard key={task.id} task={task} columnIndex={columnIndex} onMove={onMove} />
  ))}
</section>"#;

const PAGE_JSX: &str = r#"<div style={{ minHeight: '100vh', background: 'white' }}>
  <header style={{ borderBottom: '1px solid #e5e7eb', padding: '1rem 2rem', display: 'flex', justifyContent: 'space-between', alignItems: 'center' }}>
    <h1 style={{ fontSize: '1.5rem', fontWeight: 'bold' }}>{{NAME}} Board</h1>
    {{ACCOUNT}}
  </header>

  <div style={{ padding: '2rem', display: 'flex', flexDirection: 'column', gap: '1.5rem' }}>
    <form onSubmit={handleAdd} style={{ display: 'flex', gap: '0.5rem', maxWidth: '600px' }}>
      {{TITLE}}
      {{ADD}}
    </form>

    <div style={{ display: 'grid', gridTemplateColumns: 'repeat(3, minmax(0, 1fr))', gap: '1.5rem' }}>
      {COLUMNS.map((column, columnIndex) => (
        <Column
          key={column.id}
          column={column}
          columnIndex={columnIndex}
          tasks={tasks.filter((t) => t.status === column.id)}
          onMove={moveTask}
        />
      ))}
    </div>

    {{UPLOAD_CARD}}
  </div>
</div>"#;
