//! Router and extra npm packages, plus the modules some of them come with

use crate::answers::ExtraPackage;
use crate::config::{merge_env_example, EnvSection};
use crate::error::Result;
use crate::project::{FileSink, Layout, Project};
use crate::runtime::{CommandRunner, Invocation};
use crate::templates::fill;
use std::collections::BTreeSet;

pub const ROUTER: &str = "react-router-dom";

/// Everything the single dependency install covers
pub fn dependencies(layout: Layout, extras: &BTreeSet<ExtraPackage>) -> Vec<&'static str> {
    let router = (!layout.is_next()).then_some(ROUTER);
    router
        .into_iter()
        .chain(extras.iter().map(ExtraPackage::npm_name))
        .collect()
}

/// Install the router and the extra packages in one invocation
pub async fn install<S: FileSink, R: CommandRunner>(
    project: &mut Project<S>,
    runner: &mut R,
    extras: &BTreeSet<ExtraPackage>,
) -> Result<()> {
    let packages = dependencies(project.layout(), extras);
    if packages.is_empty() {
        return Ok(());
    }
    runner
        .run(&Invocation::npm_install(packages, false).in_dir(project.root()))
        .await
}

/// Write the modules that ship with some extra packages
pub fn write_modules<S: FileSink>(
    project: &mut Project<S>,
    extras: &BTreeSet<ExtraPackage>,
) -> Result<()> {
    let layout = project.layout();

    if extras.contains(&ExtraPackage::Axios) {
        project.write(
            "src/utils/axiosInstance.js",
            &fill(AXIOS_INSTANCE, &[("API_URL", &layout.env_access("API_URL"))]),
        )?;
        let section = EnvSection::new("API")
            .var(layout.env_key("API_URL"), "http://localhost:5000");
        merge_env_example(project, &section)?;
    }

    if extras.contains(&ExtraPackage::Zustand) {
        project.write(
            "src/store/useAppStore.js",
            &format!("{}{}", layout.client_directive(), APP_STORE),
        )?;
    }

    Ok(())
}

const AXIOS_INSTANCE: &str = r#"import axios from 'axios';

export const api = axios.create({
  baseURL: {{API_URL}} || 'http://localhost:5000',
  headers: { 'Content-Type': 'application/json' },
  timeout: 10000,
});

api.interceptors.request.use(
  (config) => {
    const token = localStorage.getItem('token');
    if (token) {
      config.headers.Authorization = `Bearer ${token}`;
    }
    return config;
  },
  (error) => Promise.reject(error)
);

api.interceptors.response.use(
  (response) => response.data,
  (error) => {
    if (error.response) {
      console.error('API Error:', error.response.data?.message || error.message);
      if (error.response.status === 401) {
        window.location.href = '/login';
      }
    } else if (error.request) {
      console.error('No response received from server.');
    } else {
      console.error('Request setup error:', error.message);
    }
    return Promise.reject(error);
  }
);

export default api;
"#;

const APP_STORE: &str = r#"import { create } from 'zustand';
import { persist } from 'zustand/middleware';

export const useAppStore = create(
  persist(
    (set) => ({
      theme: 'light',
      sidebarOpen: true,
      notifications: [],
      toggleTheme: () => set((state) => ({ theme: state.theme === 'light' ? 'dark' : 'light' })),
      toggleSidebar: () => set((state) => ({ sidebarOpen: !state.sidebarOpen })),
      notify: (message) =>
        set((state) => ({
          notifications: [...state.notifications, { id: Date.now(), message }],
        })),
      dismiss: (id) =>
        set((state) => ({
          notifications: state.notifications.filter((n) => n.id !== id),
        })),
    }),
    { name: 'app-store', partialize: (state) => ({ theme: state.theme }) }
  )
);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Framework;
    use crate::config::env::{parse_keys, ENV_EXAMPLE};
    use crate::project::MemorySink;
    use crate::runtime::RecordingRunner;

    fn extras(list: &[ExtraPackage]) -> BTreeSet<ExtraPackage> {
        list.iter().copied().collect()
    }

    #[tokio::test]
    async fn test_vite_always_installs_router() {
        let mut project = Project::new("app", Layout::for_framework(Framework::Vite), MemorySink::new());
        let mut runner = RecordingRunner::new();
        install(&mut project, &mut runner, &extras(&[ExtraPackage::Zustand, ExtraPackage::Axios]))
            .await
            .unwrap();
        assert_eq!(runner.commands(), vec!["npm install react-router-dom axios zustand"]);
    }

    #[tokio::test]
    async fn test_next_without_extras_installs_nothing() {
        let mut project = Project::new("app", Layout::for_framework(Framework::Next), MemorySink::new());
        let mut runner = RecordingRunner::new();
        install(&mut project, &mut runner, &BTreeSet::new()).await.unwrap();
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn test_axios_module_and_env() {
        let mut project = Project::new("app", Layout::for_framework(Framework::Next), MemorySink::new());
        write_modules(&mut project, &extras(&[ExtraPackage::Axios])).unwrap();

        let module = project.read("src/utils/axiosInstance.js").unwrap();
        assert!(module.contains("baseURL: process.env.NEXT_PUBLIC_API_URL || 'http://localhost:5000'"));
        let keys = parse_keys(&project.read(ENV_EXAMPLE).unwrap());
        assert!(keys.contains("NEXT_PUBLIC_API_URL"));
        assert!(!project.exists("src/store/useAppStore.js"));
    }

    #[test]
    fn test_modules_skip_plain_packages() {
        let mut project = Project::new("app", Layout::for_framework(Framework::Vite), MemorySink::new());
        write_modules(&mut project, &extras(&[ExtraPackage::Moment, ExtraPackage::Yup])).unwrap();
        assert!(project.changes().is_empty());
    }
}
