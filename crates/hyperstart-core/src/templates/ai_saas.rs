//! AI studio: prompt box, provider picker, output and generation history.
//!
//! Without providers the page keeps its layout but shows a setup notice in
//! place of the generation hooks, which only exist when the AI backend does.

use super::fill;
use super::sections;
use super::ui::{self, Imports, Ui, Variant};
use crate::answers::{AiFeature, AnswerSet, Choice};

pub const COMPONENT: &str = "AiStudio";

pub fn render(ui: &Ui, answers: &AnswerSet) -> String {
    let mut imports = Imports::new();
    imports.named("react", &["useState"]);
    let enabled = !answers.ai_providers().is_empty();

    let account = sections::account(ui, &mut imports, answers);
    let checkout = sections::checkout(
        ui,
        &mut imports,
        answers,
        "Upgrade to Pro",
        "{ mode: 'subscription' }",
    );

    let mut blocks = Vec::new();
    if enabled {
        imports.named(&ui.src_import("lib/ai"), &["FEATURES", "PROVIDERS", "DEFAULT_PROVIDER"]);
        imports.named(&ui.src_import("hooks/useGeneration"), &["useGeneration"]);
        imports.named(&ui.src_import("hooks/useGenerations"), &["useGenerations"]);
    } else {
        blocks.push(local_features(answers));
    }

    let feature = ui::button(
        ui,
        &mut imports,
        "{f.label}",
        "key={f.id} onClick={() => setFeature(f.id)} aria-pressed={feature === f.id}",
        Variant::Outline,
    );
    let credits = ui::badge(ui, &mut imports, "{credits} credits", "");
    let prompt_label = ui::label(ui, &mut imports, "prompt", "Prompt");
    let prompt_input = ui::textarea(
        ui,
        &mut imports,
        &format!(
            "id=\"prompt\" placeholder=\"Describe what you want to create...\" value={{prompt}} onChange={{(e) => setPrompt(e.target.value)}}{}",
            if enabled { "" } else { " disabled" }
        ),
    );

    let (controls, output) = if enabled {
        let provider = ui::button(
            ui,
            &mut imports,
            "{meta.label}",
            "key={id} onClick={() => setProvider(id)} aria-pressed={provider === id}",
            Variant::Ghost,
        );
        let generate = ui::button(
            ui,
            &mut imports,
            "{loading ? 'Generating...' : 'Generate'}",
            "onClick={handleGenerate} disabled={loading || !prompt.trim() || credits <= 0}",
            Variant::Primary,
        );
        let reset = ui::button(ui, &mut imports, "Clear", "onClick={reset} disabled={loading}", Variant::Ghost);
        (
            fill(PROVIDER_CONTROLS, &[("PROVIDER", &provider), ("GENERATE", &generate), ("RESET", &reset)]),
            OUTPUT_BODY.to_string(),
        )
    } else {
        (String::new(), NOTICE_BODY.to_string())
    };

    let studio_card = ui::card(
        ui,
        &mut imports,
        "",
        Some("Create"),
        Some("Pick a feature, write a prompt and generate."),
        &fill(
            STUDIO_BODY,
            &[
                ("FEATURE", &feature),
                ("PROMPT_LABEL", &prompt_label),
                ("PROMPT_INPUT", &prompt_input),
                ("CONTROLS", &controls),
            ],
        ),
    );
    let output_card = ui::card(ui, &mut imports, "", Some("Output"), None, &output);
    let history_card = if enabled {
        ui::card(ui, &mut imports, "", Some("History"), Some("Your latest generations"), HISTORY_BODY)
    } else {
        String::new()
    };
    let upgrade_card = checkout
        .as_ref()
        .map(|section| {
            ui::card(
                ui,
                &mut imports,
                "",
                Some("Go Pro"),
                Some("Unlimited generations and priority access to every model."),
                &section.jsx,
            )
        })
        .unwrap_or_default();

    let mut setup = vec![
        sections::setup([&account, &checkout]),
        "const [prompt, setPrompt] = useState('');".to_string(),
        "const [feature, setFeature] = useState(FEATURES[0].id);".to_string(),
        "const [credits, setCredits] = useState(100);".to_string(),
    ];
    if enabled {
        setup.push(GENERATION_SETUP.to_string());
    }
    let setup: Vec<&str> = setup.iter().map(String::as_str).collect();

    let jsx = fill(
        PAGE_JSX,
        &[
            ("ACCOUNT", &sections::jsx_or(&account, "")),
            ("CREDITS", &credits),
            ("STUDIO_CARD", &studio_card),
            ("OUTPUT_CARD", &output_card),
            ("HISTORY_CARD", &history_card),
            ("UPGRADE_CARD", &upgrade_card),
        ],
    );
    blocks.push(ui::component(
        COMPONENT,
        "",
        &sections::join(&setup),
        &sections::protect(ui, &mut imports, answers, &jsx),
        true,
    ));

    ui::module(ui, &imports, &blocks)
}

/// Feature list for a page that has no `src/lib/ai.js` to import it from
fn local_features(answers: &AnswerSet) -> String {
    let features: Vec<AiFeature> = if answers.ai_features().is_empty() {
        vec![AiFeature::TextGeneration]
    } else {
        answers.ai_features().iter().copied().collect()
    };
    let entries: Vec<String> = features
        .iter()
        .map(|f| format!("  {{ id: {}, label: {} }},", ui::js_string(f.id()), ui::js_string(f.label())))
        .collect();
    format!("const FEATURES = [\n{}\n];", entries.join("\n"))
}

const GENERATION_SETUP: &str = r#"const [provider, setProvider] = useState(DEFAULT_PROVIDER);
const { data: result, loading, error, generate, reset } = useGeneration();
const { data: history, refresh } = useGenerations(10);

const handleGenerate = async () => {
  await generate(prompt, { provider, feature });
  setCredits((current) => current - 1);
  refresh();
};"#;

const STUDIO_BODY: &str = r#"<div style={{ display: 'flex', flexDirection: 'column', gap: '1rem' }}>
  <div style={{ display: 'flex', flexWrap: 'wrap', gap: '0.5rem' }}>
    {FEATURES.map((f) => (
      {{FEATURE}}
    ))}
  </div>
  <div>
    {{PROMPT_LABEL}}
    {{PROMPT_INPUT}}
  </div>
  {{CONTROLS}}
</div>"#;

const PROVIDER_CONTROLS: &str = r#"<div style={{ display: 'flex', justifyContent: 'space-between', alignItems: 'center', flexWrap: 'wrap', gap: '0.5rem' }}>
  <div style={{ display: 'flex', gap: '0.25rem' }}>
    {Object.entries(PROVIDERS).map(([id, meta]) => (
      {{PROVIDER}}
    ))}
  </div>
  <div style={{ display: 'flex', gap: '0.5rem' }}>
    {{RESET}}
    {{GENERATE}}
  </div>
</div>"#;

const OUTPUT_BODY: &str = r#"{error && <p style={{ color: '#dc2626' }}>{error}</p>}
{result ? (
  <pre style={{ whiteSpace: 'pre-wrap', fontFamily: 'inherit', lineHeight: '1.6' }}>{result.output}</pre>
) : (
  <p style={{ color: '#6b7280' }}>Your generated content will appear here.</p>
)}"#;

const NOTICE_BODY: &str = r#"<p style={{ color: '#6b7280', lineHeight: '1.6' }}>
  No AI provider is configured yet. Add one to <code>src/lib/ai.js</code> and the
  <code>generate</code> edge function to start creating.
</p>"#;

const HISTORY_BODY: &str = r#"{history.length === 0 ? (
  <p style={{ color: '#6b7280' }}>Nothing generated yet.</p>
) : (
  <ul style={{ listStyle: 'none', padding: 0, display: 'flex', flexDirection: 'column', gap: '0.75rem' }}>
    {history.map((item) => (
      <li key={item.id} style={{ borderBottom: '1px solid #e5e7eb', paddingBottom: '0.75rem' }}>
        <div style={{ fontWeight: 500 }}>{item.prompt}</div>
        <div style={{ color: '#6b7280', fontSize: '0.875rem' }}>
          {item.provider} · {new Date(item.created_at).toLocaleString()}
        </div>
      </li>
    ))}
  </ul>
)}"#;

const PAGE_JSX: &str = r#"<div style={{ minHeight: '100vh', background: '#f9fafb' }}>
  <header style={{ background: 'white', borderBottom: '1px solid #e5e7eb', padding: '1rem 2rem', display: 'flex', justifyContent: 'space-between', alignItems: 'center' }}>
    <h1 style={{ fontSize: '1.5rem', fontWeight: 'bold' }}>AI Studio</h1>
    <div style={{ display: 'flex', alignItems: 'center', gap: '1rem' }}>
      {{CREDITS}}
      {{ACCOUNT}}
    </div>
  </header>

  <div style={{ maxWidth: '1200px', margin: '0 auto', padding: '2rem', display: 'grid', gridTemplateColumns: 'minmax(0, 2fr) minmax(0, 1fr)', gap: '2rem' }}>
    <main style={{ display: 'flex', flexDirection: 'column', gap: '1.5rem' }}>
      {{STUDIO_CARD}}
      {{OUTPUT_CARD}}
    </main>
    <aside style={{ display: 'flex', flexDirection: 'column', gap: '1.5rem' }}>
      {{UPGRADE_CARD}}
      {{HISTORY_CARD}}
    </aside>
  </div>
</div>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{AiProvider, Answers, CssFramework, Framework, Template};

    fn render_with(providers: &[AiProvider], features: &[AiFeature], payments: bool) -> String {
        let mut answers = Answers::new("studio", Framework::Vite, Template::AiSaas, CssFramework::TailwindShadcn);
        answers.ai_providers.extend(providers.iter().copied());
        answers.ai_features.extend(features.iter().copied());
        answers.include_payments = payments;
        let answers = answers.finalize().unwrap();
        render(&Ui::new(&answers), &answers)
    }

    #[test]
    fn test_providers_wire_generation_hooks() {
        let page = render_with(&[AiProvider::OpenAi], &[AiFeature::Chat], true);
        assert!(page.contains("import { DEFAULT_PROVIDER, FEATURES, PROVIDERS } from '../lib/ai';"));
        assert!(page.contains("const { data: result, loading, error, generate, reset } = useGeneration();"));
        assert!(page.contains("startCheckout({ mode: 'subscription' })"));
        assert!(!page.contains("const FEATURES = ["));
    }

    #[test]
    fn test_no_providers_degrades_to_notice() {
        let page = render_with(&[], &[AiFeature::Summarization], false);
        assert!(!page.contains("useGeneration"));
        assert!(!page.contains("useCheckout"));
        assert!(page.contains("No AI provider is configured yet."));
        assert!(page.contains("{ id: \"summarization\", label: \"Summarization\" },"));
        assert!(page.contains("disabled"));
    }

    #[test]
    fn test_no_features_falls_back_to_text_generation() {
        let page = render_with(&[], &[], false);
        assert!(page.contains("{ id: \"text-generation\", label: \"Text Generation\" },"));
    }
}
