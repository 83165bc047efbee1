//! Social feed: post composer, feed with likes and a suggestions sidebar

use super::fill;
use super::sections;
use super::ui::{self, Imports, Ui, Variant};
use crate::answers::AnswerSet;

pub const COMPONENT: &str = "SocialFeed";

pub fn render(ui: &Ui, answers: &AnswerSet) -> String {
    let mut imports = Imports::new();
    imports.named("react", &["useState"]);

    let account = sections::account(ui, &mut imports, answers);
    let upload = sections::upload(ui, &mut imports, answers, "posts", "Attach a photo");
    let posts = sections::records(
        ui,
        &mut imports,
        answers,
        "feed",
        "posts",
        "{ orderBy: ['createdAt', 'desc'], limit: 50 }",
        "SAMPLE_POSTS",
    );
    let writer = sections::writer(ui, &mut imports, answers, "addPost", "posts");

    let author = if account.is_some() {
        "user?.displayName || user?.email || 'You'"
    } else {
        "'You'"
    };
    let publish = match &writer {
        Some(_) => "await addPost(post);",
        None => "setLocalPosts((current) => [{ ...post, id: `local-${Date.now()}` }, ...current]);",
    };
    let attachment = if upload.is_some() { "imageUrl: uploaded?.url ?? null," } else { "" };

    let draft = ui::textarea(
        ui,
        &mut imports,
        "placeholder=\"What's happening?\" value={draft} onChange={(e) => setDraft(e.target.value)}",
    );
    let post_button = ui::button(ui, &mut imports, "Post", "onClick={handlePost} disabled={!draft.trim()}", Variant::Primary);
    let composer = ui::card(
        ui,
        &mut imports,
        "",
        None,
        None,
        &fill(
            COMPOSER_BODY,
            &[
                ("DRAFT", &draft),
                ("UPLOAD", &sections::jsx_or(&upload, "")),
                ("POST", &post_button),
            ],
        ),
    );

    let like = ui::button(
        ui,
        &mut imports,
        "{liked ? '❤️' : '🤍'} {post.likes + (liked ? 1 : 0)}",
        "onClick={() => onLike(post.id)}",
        Variant::Ghost,
    );
    let post_card = ui::card(ui, &mut imports, "", None, None, &fill(POST_BODY, &[("LIKE", &like)]));
    let post = ui::component("Post", "{ post, liked, onLike }", "", &post_card, false);

    let follow = ui::button(ui, &mut imports, "Follow", "", Variant::Outline);
    let tag = ui::badge(ui, &mut imports, "#{tag}", "key={tag}");
    let sidebar_card = ui::card(
        ui,
        &mut imports,
        "",
        Some("Who to follow"),
        None,
        &fill(SIDEBAR_BODY, &[("FOLLOW", &follow), ("TAG", &tag)]),
    );
    let sidebar = ui::component("Suggestions", "", "", &sidebar_card, false);

    let local_posts = if writer.is_some() {
        ""
    } else {
        "const [localPosts, setLocalPosts] = useState([]);"
    };
    let merged = if writer.is_some() {
        "const posts = feed;"
    } else {
        "const posts = [...localPosts, ...feed];"
    };
    let setup = sections::join(&[
        &sections::setup([&account, &upload]),
        writer.as_deref().unwrap_or(""),
        "const [draft, setDraft] = useState('');",
        "const [likes, setLikes] = useState({});",
        local_posts,
        &posts,
        merged,
        "",
        &fill(
            HANDLERS,
            &[("AUTHOR", author), ("ATTACHMENT", attachment), ("PUBLISH", publish)],
        ),
    ]);
    let jsx = fill(
        PAGE_JSX,
        &[
            ("NAME", &ui::jsx_text(answers.project_name())),
            ("ACCOUNT", &sections::jsx_or(&account, "")),
            ("COMPOSER", &composer),
        ],
    );
    let page = ui::component(
        COMPONENT,
        "",
        &setup,
        &sections::protect(ui, &mut imports, answers, &jsx),
        true,
    );

    ui::module(ui, &imports, &[SAMPLE_DATA.to_string(), post, sidebar, page])
}

const SAMPLE_DATA: &str = r#"const SAMPLE_POSTS = [
  { id: 's1', author: 'Ada Lovelace', content: 'Just shipped a new feature. Feels good!', likes: 12, createdAt: '2024-03-01T09:30:00.000Z' },
  { id: 's2', author: 'Grace Hopper', content: 'Remember: it is easier to ask forgiveness than permission.', likes: 48, createdAt: '2024-02-28T16:05:00.000Z' },
  { id: 's3', author: 'Alan Turing', content: 'Working on something that thinks. More soon.', likes: 31, createdAt: '2024-02-27T11:20:00.000Z' },
];

const SUGGESTIONS = ['Linus', 'Margaret', 'Dennis'];
const TRENDING = ['react', 'webdev', 'opensource', 'design'];"#;

const HANDLERS: &str = r#"const handlePost = async () => {
  const post = {
    author: {{AUTHOR}},
    content: draft.trim(),
    likes: 0,
    createdAt: new Date().toISOString(),
    {{ATTACHMENT}}
  };
  {{PUBLISH}}
  setDraft('');
};

const toggleLike = (id) => setLikes((current) => ({ ...current, [id]: !current[id] }));"#;

const COMPOSER_BODY: &str = r#"<div style={{ display: 'flex', flexDirection: 'column', gap: '0.75rem' }}>
  {{DRAFT}}
  {{UPLOAD}}
  <div style={{ display: 'flex', justifyContent: 'flex-end' }}>
    {{POST}}
  </div>
</div>"#;

const POST_BODY: &str = r#"<div style={{ display: 'flex', alignItems: 'center', gap: '0.75rem', marginBottom: '0.75rem' }}>
  <div style={{ width: '40px', height: '40px', borderRadius: '50%', background: '#e0e7ff', display: 'flex', alignItems: 'center', justifyContent: 'center', fontWeight: 'bold' }}>
    {post.author?.[0] ?? '?'}
  </div>
  <div>
    <div style={{ fontWeight: 600 }}>{post.author}</div>
    <div style={{ color: '#6b7280', fontSize: '0.75rem' }}>{new Date(post.createdAt).toLocaleString()}</div>
  </div>
</div>
<p style={{ lineHeight: '1.6', marginBottom: '0.75rem' }}>{post.content}</p>
{post.imageUrl && <img src={post.imageUrl} alt="" style={{ width: '100%', borderRadius: '0.5rem', marginBottom: '0.75rem' }} />}
{{LIKE}}"#;

const SIDEBAR_BODY: &str = r#"<div style={{ display: 'flex', flexDirection: 'column', gap: '0.75rem' }}>
  {SUGGESTIONS.map((name) => (
    <div key={name} style={{ display: 'flex', justifyContent: 'space-between', alignItems: 'center' }}>
      <span>{name}</span>
      {{FOLLOW}}
    </div>
  ))}
  <div style={{ display: 'flex', flexWrap: 'wrap', gap: '0.5rem', marginTop: '0.5rem' }}>
    {TRENDING.map((tag) => (
      {{TAG}}
    ))}
  </div>
</div>"#;

const PAGE_JSX: &str = r#"<div style={{ minHeight: '100vh', background: '#f3f4f6' }}>
  <header style={{ background: 'white', borderBottom: '1px solid #e5e7eb', padding: '1rem 2rem', display: 'flex', justifyContent: 'space-between', alignItems: 'center' }}>
    <h1 style={{ fontSize: '1.5rem', fontWeight: 'bold' }}>{{NAME}}</h1>
    {{ACCOUNT}}
  </header>

  <div style={{ maxWidth: '1000px', margin: '0 auto', padding: '2rem', display: 'flex', gap: '2rem', alignItems: 'flex-start' }}>
    <main style={{ flex: 1, display: 'flex', flexDirection: 'column', gap: '1rem' }}>
      {{COMPOSER}}
      {posts.map((post) => (
        <Post key={post.id} post={post} liked={Boolean(likes[post.id])} onLike={toggleLike} />
      ))}
    </main>
    <aside style={{ width: '280px' }}>
      <Suggestions />
    </aside>
  </div>
</div>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Answers, CssFramework, FirebaseService, Framework, Template};

    fn render_with(services: &[FirebaseService]) -> String {
        let mut answers = Answers::new("Circle", Framework::Next, Template::Social, CssFramework::ReactBootstrap);
        answers.firebase_services.extend(services.iter().copied());
        let answers = answers.finalize().unwrap();
        render(&Ui::new(&answers), &answers)
    }

    #[test]
    fn test_local_feed_without_database() {
        let page = render_with(&[]);
        assert!(page.contains("const [localPosts, setLocalPosts] = useState([]);"));
        assert!(page.contains("const feed = SAMPLE_POSTS;"));
        assert!(!page.contains("imageUrl: uploaded"));
    }

    #[test]
    fn test_database_and_storage_feed() {
        let page = render_with(&[FirebaseService::Database, FirebaseService::Storage, FirebaseService::Auth]);
        assert!(page.contains("await addPost(post);"));
        assert!(page.contains("imageUrl: uploaded?.url ?? null,"));
        assert!(page.contains("author: user?.displayName || user?.email || 'You',"));
        assert!(!page.contains("localPosts"));
    }
}
