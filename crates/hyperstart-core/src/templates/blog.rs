//! Blog: searchable post list, category sidebar and an optional composer

use super::fill;
use super::sections;
use super::ui::{self, Imports, Ui, Variant};
use crate::answers::AnswerSet;

pub const COMPONENT: &str = "Blog";

pub fn render(ui: &Ui, answers: &AnswerSet) -> String {
    let mut imports = Imports::new();
    imports.named("react", &["useState"]);

    let account = sections::account(ui, &mut imports, answers);
    let upload = sections::upload(ui, &mut imports, answers, "covers", "Cover image");
    let posts = sections::records(
        ui,
        &mut imports,
        answers,
        "posts",
        "posts",
        "{ orderBy: ['createdAt', 'desc'], limit: 10 }",
        "SAMPLE_POSTS",
    );
    let writer = sections::writer(ui, &mut imports, answers, "addPost", "posts");

    let read_more = ui::button(ui, &mut imports, "Read More", "", Variant::Outline);
    let post_card = ui::card(
        ui,
        &mut imports,
        "",
        Some("{post.title}"),
        Some("By {post.author} • {new Date(post.createdAt).toLocaleDateString()}"),
        &format!(
            "<p style={{{{ lineHeight: '1.6', color: '#4b5563', marginBottom: '1rem' }}}}>{{post.excerpt}}</p>\n{}",
            read_more
        ),
    );
    let post = ui::component(
        "BlogPost",
        "{ post }",
        "",
        &format!("<div style={{{{ marginBottom: '2rem' }}}}>\n{}\n</div>", ui::indent(&post_card, 2)),
        false,
    );

    let search = ui::input(
        ui,
        &mut imports,
        "type=\"text\" placeholder=\"Search articles...\" value={searchTerm} onChange={(e) => setSearchTerm(e.target.value)}",
    );
    let header = ui::component(
        "BlogHeader",
        "{ searchTerm, setSearchTerm }",
        &sections::setup([&account]),
        &fill(
            HEADER_JSX,
            &[
                ("NAME", &ui::jsx_text(answers.project_name())),
                ("SEARCH", &search),
                ("ACCOUNT", &sections::jsx_or(&account, "")),
            ],
        ),
        false,
    );

    let category = ui::badge(ui, &mut imports, "{category}", "key={category}");
    let sidebar_card = ui::card(
        ui,
        &mut imports,
        "",
        Some("Categories"),
        None,
        &format!(
            "<div style={{{{ display: 'flex', flexWrap: 'wrap', gap: '0.5rem' }}}}>\n  {{CATEGORIES.map((category) => (\n    {}\n  ))}}\n</div>",
            category
        ),
    );
    let sidebar = ui::component("BlogSidebar", "", "", &sidebar_card, false);

    let mut blocks = vec![SAMPLE_DATA.to_string(), post, header, sidebar];

    let composer = writer.as_ref().map(|writer| {
        let title_label = ui::label(ui, &mut imports, "post-title", "Title");
        let title_input = ui::input(
            ui,
            &mut imports,
            "id=\"post-title\" value={title} onChange={(e) => setTitle(e.target.value)}",
        );
        let body_label = ui::label(ui, &mut imports, "post-body", "Content");
        let body_input = ui::textarea(
            ui,
            &mut imports,
            "id=\"post-body\" value={content} onChange={(e) => setContent(e.target.value)}",
        );
        let publish = ui::button(
            ui,
            &mut imports,
            "{saving ? 'Publishing...' : 'Publish'}",
            "type=\"submit\" disabled={saving || !title}",
            Variant::Primary,
        );
        let form = fill(
            COMPOSER_FORM,
            &[
                ("TITLE_LABEL", &title_label),
                ("TITLE_INPUT", &title_input),
                ("BODY_LABEL", &body_label),
                ("BODY_INPUT", &body_input),
                ("UPLOAD", &sections::jsx_or(&upload, "")),
                ("PUBLISH", &publish),
            ],
        );
        let card = ui::card(ui, &mut imports, "", Some("Write a post"), None, &form);
        let (user, author) = if account.is_some() {
            (
                "const { user } = useAuth();",
                "user?.displayName || user?.email || 'Anonymous'",
            )
        } else {
            ("", "'Anonymous'")
        };
        let setup = sections::join(&[
            user,
            writer,
            &sections::setup([&upload]),
            "",
            &fill(COMPOSER_SETUP, &[("AUTHOR", author)]),
        ]);
        ui::component(
            "PostComposer",
            "",
            &setup,
            &format!("<div style={{{{ marginBottom: '2rem' }}}}>\n{}\n</div>", ui::indent(&card, 2)),
            false,
        )
    });
    if let Some(composer) = composer {
        blocks.push(composer);
    }

    let page_setup = sections::join(&["const [searchTerm, setSearchTerm] = useState('');", &posts, "", FILTER]);
    let main = fill(
        PAGE_JSX,
        &[("COMPOSER", if writer.is_some() { "<PostComposer />" } else { "" })],
    );
    blocks.push(ui::component(
        COMPONENT,
        "",
        &page_setup,
        &sections::protect(ui, &mut imports, answers, &main),
        true,
    ));

    ui::module(ui, &imports, &blocks)
}

const SAMPLE_DATA: &str = r#"const CATEGORIES = ['Development', 'Design', 'Technology', 'Career'];

const SAMPLE_POSTS = [
  {
    id: 'p1',
    title: 'Getting Started with Modern Web Development',
    excerpt: 'Learn the fundamentals of building modern web applications with React and the latest tools.',
    author: 'John Doe',
    createdAt: '2024-01-15T10:00:00.000Z',
    category: 'Development',
  },
  {
    id: 'p2',
    title: 'Design Systems That Scale',
    excerpt: 'Building consistent and maintainable design systems for growing teams and products.',
    author: 'Jane Smith',
    createdAt: '2024-01-12T10:00:00.000Z',
    category: 'Design',
  },
  {
    id: 'p3',
    title: 'The Future of AI in Web Development',
    excerpt: 'How machine learning is changing the way we build and maintain web applications.',
    author: 'Mike Johnson',
    createdAt: '2024-01-10T10:00:00.000Z',
    category: 'Technology',
  },
];"#;

const FILTER: &str = r#"const term = searchTerm.toLowerCase();
const filteredPosts = posts.filter(
  (post) =>
    post.title.toLowerCase().includes(term) ||
    (post.excerpt || '').toLowerCase().includes(term)
);"#;

const HEADER_JSX: &str = r#"<header style={{ background: 'white', borderBottom: '1px solid #e5e7eb', padding: '2rem 0' }}>
  <div style={{ maxWidth: '1200px', margin: '0 auto', padding: '0 2rem' }}>
    <div style={{ display: 'flex', justifyContent: 'flex-end' }}>
      {{ACCOUNT}}
    </div>
    <h1 style={{ fontSize: '3rem', fontWeight: 'bold', textAlign: 'center', marginBottom: '1rem' }}>
      {{NAME}} Blog
    </h1>
    <p style={{ textAlign: 'center', color: '#6b7280', fontSize: '1.125rem', marginBottom: '2rem' }}>
      Thoughts, stories and ideas
    </p>
    <div style={{ maxWidth: '500px', margin: '0 auto' }}>
      {{SEARCH}}
    </div>
  </div>
</header>"#;

const COMPOSER_SETUP: &str = r#"const [title, setTitle] = useState('');
const [content, setContent] = useState('');

const handleSubmit = async (e) => {
  e.preventDefault();
  await addPost({
    title,
    content,
    excerpt: content.slice(0, 160),
    author: {{AUTHOR}},
    category: 'Development',
  });
  setTitle('');
  setContent('');
};"#;

const COMPOSER_FORM: &str = r#"<form onSubmit={handleSubmit} style={{ display: 'flex', flexDirection: 'column', gap: '1rem' }}>
  <div>
    {{TITLE_LABEL}}
    {{TITLE_INPUT}}
  </div>
  <div>
    {{BODY_LABEL}}
    {{BODY_INPUT}}
  </div>
  {{UPLOAD}}
  {{PUBLISH}}
</form>"#;

const PAGE_JSX: &str = r#"<div style={{ minHeight: '100vh', background: '#f9fafb' }}>
  <BlogHeader searchTerm={searchTerm} setSearchTerm={setSearchTerm} />

  <div style={{ maxWidth: '1200px', margin: '0 auto', padding: '2rem', display: 'flex', gap: '2rem' }}>
    <main style={{ flex: 1 }}>
      {{COMPOSER}}
      {filteredPosts.length === 0 ? (
        <div style={{ textAlign: 'center', padding: '2rem' }}>No posts found matching your search.</div>
      ) : (
        filteredPosts.map((post) => <BlogPost key={post.id} post={post} />)
      )}
    </main>
    <aside style={{ width: '300px' }}>
      <BlogSidebar />
    </aside>
  </div>
</div>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Answers, CssFramework, FirebaseService, Framework, Template};

    fn render_with(framework: Framework, css: CssFramework, services: &[FirebaseService]) -> String {
        let mut answers = Answers::new("Dev Notes", framework, Template::Blog, css);
        answers.firebase_services.extend(services.iter().copied());
        let answers = answers.finalize().unwrap();
        render(&Ui::new(&answers), &answers)
    }

    #[test]
    fn test_static_blog_has_no_composer() {
        let page = render_with(Framework::Vite, CssFramework::BootstrapCdn, &[]);
        assert!(page.contains("const posts = SAMPLE_POSTS;"));
        assert!(!page.contains("PostComposer"));
        assert!(!page.contains("useStorage"));
        assert!(page.contains("Dev Notes Blog"));
    }

    #[test]
    fn test_database_adds_composer() {
        let page = render_with(
            Framework::Next,
            CssFramework::TailwindShadcn,
            &[FirebaseService::Database, FirebaseService::Storage],
        );
        assert!(page.starts_with("'use client';"));
        assert!(page.contains("useCollection('posts'"));
        assert!(page.contains("const { addDocument: addPost, loading: saving } = useFirestore('posts');"));
        assert!(page.contains("<PostComposer />"));
        assert!(page.contains("uploadFile(file, `covers/"));
        assert!(page.contains("import { Textarea } from '@/components/ui/textarea';"));
        assert!(page.contains("author: 'Anonymous',"));
    }

    #[test]
    fn test_auth_author_comes_from_user() {
        let page = render_with(
            Framework::Vite,
            CssFramework::Tailwind,
            &[FirebaseService::Auth, FirebaseService::Database],
        );
        assert!(page.contains("author: user?.displayName || user?.email || 'Anonymous',"));
        assert!(page.contains("<ProtectedRoute>"));
    }
}
