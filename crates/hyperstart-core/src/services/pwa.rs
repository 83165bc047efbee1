//! Progressive Web App support: manifest, service worker, icons and install hook

use crate::error::Result;
use crate::patch;
use crate::project::{FileSink, Layout, Project};
use crate::runtime::{CommandRunner, Invocation};
use crate::templates::fill;
use crate::templates::ui::hook_return;
use serde_json::json;

pub const THEME_COLOR: &str = "#2563eb";

/// Icons written to `public/`, as (file name, size in pixels)
pub const ICONS: &[(&str, u32)] = &[
    ("pwa-192x192.svg", 192),
    ("pwa-512x512.svg", 512),
    ("apple-touch-icon.svg", 180),
];

pub async fn install<S: FileSink, R: CommandRunner>(
    project: &mut Project<S>,
    runner: &mut R,
    project_name: &str,
    enabled: bool,
) -> Result<()> {
    if !enabled {
        return Ok(());
    }
    let layout = project.layout();

    if layout.is_next() {
        project.write("public/manifest.json", &crate::config::to_json(&manifest(project_name))?)?;
        project.write("public/sw.js", SERVICE_WORKER)?;
        let entry = project.resolve(layout.entry_candidates());
        project.patch(entry, link_manifest)?;
    } else {
        runner
            .run(&Invocation::npm_install(["vite-plugin-pwa"], true).in_dir(project.root()))
            .await?;
        let config = project.resolve(layout.bundler_config_candidates());
        let call = vite_plugin_call(project_name)?;
        project.patch(config, |text| {
            patch::register_vite_plugin(
                text,
                "vite-plugin-pwa",
                "import { VitePWA } from 'vite-plugin-pwa'",
                &call,
            )
        })?;
    }

    for (file, size) in ICONS {
        project.write(&format!("public/{}", file), &icon(project_name, *size))?;
    }
    project.write("src/hooks/usePWA.js", &use_pwa(layout))?;

    Ok(())
}

/// Web app manifest, shared by the Next file and the Vite plugin options
pub fn manifest(project_name: &str) -> serde_json::Value {
    json!({
        "name": project_name,
        "short_name": short_name(project_name),
        "description": format!("{} - Progressive Web App", project_name),
        "start_url": "/",
        "display": "standalone",
        "background_color": "#ffffff",
        "theme_color": THEME_COLOR,
        "icons": ICONS
            .iter()
            .filter(|(file, _)| file.starts_with("pwa-"))
            .map(|(file, size)| json!({
                "src": format!("/{}", file),
                "sizes": format!("{0}x{0}", size),
                "type": "image/svg+xml",
                "purpose": "any maskable",
            }))
            .collect::<Vec<_>>(),
    })
}

/// Manifests keep short names to twelve characters
fn short_name(project_name: &str) -> String {
    project_name.chars().take(12).collect::<String>().trim().to_string()
}

fn vite_plugin_call(project_name: &str) -> Result<String> {
    let manifest = serde_json::to_string_pretty(&manifest(project_name))?;
    let manifest = manifest.replace('\n', "\n      ");
    Ok(format!(
        "VitePWA({{\n      registerType: 'autoUpdate',\n      includeAssets: ['apple-touch-icon.svg'],\n      manifest: {},\n    }})",
        manifest
    ))
}

fn link_manifest(text: &str) -> String {
    const ANCHOR: &str = "export const metadata = {";
    if text.contains("manifest:") || !text.contains(ANCHOR) {
        return text.to_string();
    }
    text.replacen(
        ANCHOR,
        &format!("{}\n  manifest: '/manifest.json',", ANCHOR),
        1,
    )
}

fn icon(project_name: &str, size: u32) -> String {
    let initial = project_name
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "H".to_string());
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n  \
         <rect width=\"{size}\" height=\"{size}\" rx=\"{radius}\" fill=\"{color}\"/>\n  \
         <text x=\"50%\" y=\"50%\" dy=\".35em\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"{font}\" fill=\"#ffffff\">{initial}</text>\n\
         </svg>\n",
        size = size,
        radius = size / 8,
        color = THEME_COLOR,
        font = size / 2,
        initial = xml_escape(&initial),
    )
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn use_pwa(layout: Layout) -> String {
    // Next has no plugin to inject the registration
    let register = if layout.is_next() {
        "  useEffect(() => {\n    if ('serviceWorker' in navigator) {\n      navigator.serviceWorker.register('/sw.js').catch((err) => setError(err.message));\n    }\n  }, []);\n\n"
    } else {
        ""
    };
    format!(
        "{}{}",
        layout.client_directive(),
        fill(
            USE_PWA,
            &[
                ("REGISTER", register),
                (
                    "RETURN",
                    &hook_return(&["isInstallable", "isOnline", "installApp"]),
                ),
            ],
        )
    )
}

const USE_PWA: &str = r#"import { useEffect, useState } from 'react';

export function usePWA() {
  const [installPrompt, setInstallPrompt] = useState(null);
  const [isOnline, setIsOnline] = useState(typeof navigator === 'undefined' ? true : navigator.onLine);
  const [data, setData] = useState(null);
  const [loading, setLoading] = useState(false);
  const [error, setError] = useState(null);

{{REGISTER}}  useEffect(() => {
    const onPrompt = (event) => {
      event.preventDefault();
      setInstallPrompt(event);
    };
    const onOnline = () => setIsOnline(true);
    const onOffline = () => setIsOnline(false);

    window.addEventListener('beforeinstallprompt', onPrompt);
    window.addEventListener('online', onOnline);
    window.addEventListener('offline', onOffline);
    return () => {
      window.removeEventListener('beforeinstallprompt', onPrompt);
      window.removeEventListener('online', onOnline);
      window.removeEventListener('offline', onOffline);
    };
  }, []);

  const installApp = async () => {
    if (!installPrompt) return null;
    setLoading(true);
    try {
      installPrompt.prompt();
      const choice = await installPrompt.userChoice;
      setData(choice);
      setInstallPrompt(null);
      return choice;
    } catch (err) {
      setError(err.message);
      return null;
    } finally {
      setLoading(false);
    }
  };

  const isInstallable = installPrompt !== null;

  {{RETURN}}
}
"#;

const SERVICE_WORKER: &str = r#"const CACHE = 'app-cache-v1';
const PRECACHE = ['/', '/manifest.json'];

self.addEventListener('install', (event) => {
  event.waitUntil(caches.open(CACHE).then((cache) => cache.addAll(PRECACHE)));
  self.skipWaiting();
});

self.addEventListener('activate', (event) => {
  event.waitUntil(
    caches.keys().then((keys) =>
      Promise.all(keys.filter((key) => key !== CACHE).map((key) => caches.delete(key)))
    )
  );
  self.clients.claim();
});

self.addEventListener('fetch', (event) => {
  if (event.request.method !== 'GET') return;
  event.respondWith(
    fetch(event.request)
      .then((response) => {
        const copy = response.clone();
        caches.open(CACHE).then((cache) => cache.put(event.request, copy));
        return response;
      })
      .catch(() => caches.match(event.request))
  );
});
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Framework;
    use crate::project::MemorySink;
    use crate::runtime::RecordingRunner;

    const VITE_CONFIG: &str = "import { defineConfig } from 'vite'\nimport react from '@vitejs/plugin-react'\n\nexport default defineConfig({\n  plugins: [react()],\n})\n";

    #[tokio::test]
    async fn test_disabled_is_noop() {
        let mut project = Project::new("app", Layout::for_framework(Framework::Vite), MemorySink::new());
        let mut runner = RecordingRunner::new();
        install(&mut project, &mut runner, "app", false).await.unwrap();
        assert!(runner.invocations().is_empty());
        assert!(project.changes().is_empty());
    }

    #[tokio::test]
    async fn test_vite_registers_plugin() {
        let mut sink = MemorySink::new();
        sink.seed("app/vite.config.js", VITE_CONFIG);
        let mut project = Project::new("app", Layout::for_framework(Framework::Vite), sink);
        let mut runner = RecordingRunner::new();
        install(&mut project, &mut runner, "My App", true).await.unwrap();

        assert_eq!(runner.commands(), vec!["npm install -D vite-plugin-pwa"]);
        let config = project.read("vite.config.js").unwrap();
        assert!(config.starts_with("import { VitePWA } from 'vite-plugin-pwa'\n"));
        assert!(config.contains("registerType: 'autoUpdate'"));
        assert!(config.contains("\"name\": \"My App\""));
        assert!(project.exists("public/pwa-512x512.svg"));
        assert!(!project.exists("public/manifest.json"));

        let hook = project.read("src/hooks/usePWA.js").unwrap();
        assert!(hook.contains("return { data, loading, error, isInstallable, isOnline, installApp };"));
        assert!(!hook.contains("serviceWorker.register"));
    }

    #[tokio::test]
    async fn test_next_writes_manifest_and_worker() {
        let mut sink = MemorySink::new();
        sink.seed(
            "app/src/app/layout.js",
            "export const metadata = {\n  title: 'app',\n};\n",
        );
        let mut project = Project::new("app", Layout::for_framework(Framework::Next), sink);
        let mut runner = RecordingRunner::new();
        install(&mut project, &mut runner, "app", true).await.unwrap();

        assert!(runner.invocations().is_empty());
        let manifest: serde_json::Value =
            serde_json::from_str(&project.read("public/manifest.json").unwrap()).unwrap();
        assert_eq!(manifest["display"], "standalone");
        assert_eq!(manifest["icons"].as_array().unwrap().len(), 2);
        assert!(project.exists("public/sw.js"));
        assert!(project
            .read("src/app/layout.js")
            .unwrap()
            .contains("manifest: '/manifest.json',"));
        assert!(project
            .read("src/hooks/usePWA.js")
            .unwrap()
            .starts_with("'use client';"));
    }

    #[test]
    fn test_icon_escapes_initial() {
        assert!(icon("<app>", 192).contains(">A</text>"));
        assert!(icon("---", 192).contains(">H</text>"));
    }
}
