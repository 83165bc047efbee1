//! AI backend: Supabase client, provider registry, schema and edge function

use crate::answers::{AiFeature, AiProvider, Choice};
use crate::config::{merge_env_example, EnvSection};
use crate::error::Result;
use crate::project::{FileSink, Layout, Project};
use crate::runtime::{CommandRunner, Invocation};
use crate::templates::fill;
use crate::templates::ui::{hook_return, js_string};
use std::collections::BTreeSet;

/// Options that shape the generated backend
#[derive(Debug, Clone, Default)]
pub struct AiOptions {
    pub features: BTreeSet<AiFeature>,
    pub payments: bool,
}

/// Provider used when the caller does not pick one
pub fn default_provider(providers: &BTreeSet<AiProvider>) -> Option<AiProvider> {
    providers.iter().next().copied()
}

pub async fn install<S: FileSink, R: CommandRunner>(
    project: &mut Project<S>,
    runner: &mut R,
    providers: &BTreeSet<AiProvider>,
    options: &AiOptions,
) -> Result<()> {
    let Some(default) = default_provider(providers) else {
        return Ok(());
    };
    let layout = project.layout();

    runner
        .run(&Invocation::npm_install(["@supabase/supabase-js"], false).in_dir(project.root()))
        .await?;

    project.write("src/lib/supabase.js", &supabase_client(layout))?;
    project.write("src/lib/ai.js", &provider_registry(providers, default, &options.features))?;
    project.write("supabase/schema.sql", &schema(options.payments))?;
    project.write("supabase/functions/generate/index.ts", &edge_function(providers, default))?;
    project.write(
        "src/hooks/useGeneration.js",
        &format!(
            "{}{}",
            layout.client_directive(),
            fill(USE_GENERATION, &[("RETURN", &hook_return(&["generate", "reset"]))])
        ),
    )?;
    project.write(
        "src/hooks/useGenerations.js",
        &format!(
            "{}{}",
            layout.client_directive(),
            fill(USE_GENERATIONS, &[("RETURN", &hook_return(&["refresh"]))])
        ),
    )?;

    let mut section = EnvSection::new("Supabase")
        .note("Project Settings > API in the Supabase dashboard")
        .var(layout.env_key("SUPABASE_URL"), "https://your-project.supabase.co")
        .var(layout.env_key("SUPABASE_ANON_KEY"), "your-anon-key")
        .note("Provider keys are read by the edge function only; set them with `supabase secrets set`");
    for provider in providers {
        section = section.var(provider.env_key(), format!("your-{}-api-key", provider.id()));
    }
    merge_env_example(project, &section)?;

    Ok(())
}

fn supabase_client(layout: Layout) -> String {
    format!(
        "import {{ createClient }} from '@supabase/supabase-js';\n\n\
         const supabaseUrl = {};\n\
         const supabaseAnonKey = {};\n\n\
         export const supabase = createClient(supabaseUrl, supabaseAnonKey);\n",
        layout.env_access("SUPABASE_URL"),
        layout.env_access("SUPABASE_ANON_KEY"),
    )
}

/// `src/lib/ai.js`: exactly the selected providers, the default and the feature labels
pub fn provider_registry(
    providers: &BTreeSet<AiProvider>,
    default: AiProvider,
    features: &BTreeSet<AiFeature>,
) -> String {
    let entries: Vec<String> = providers
        .iter()
        .map(|provider| {
            format!(
                "{}: {{ label: {}, model: {}, docs: {} }},",
                provider.id(),
                js_string(provider.label()),
                js_string(provider.default_model()),
                js_string(provider.docs_url()),
            )
        })
        .collect();

    let features: Vec<String> = if features.is_empty() {
        vec![format!("  {{ id: 'text-generation', label: {} }},", js_string(AiFeature::TextGeneration.label()))]
    } else {
        features
            .iter()
            .map(|f| format!("  {{ id: {}, label: {} }},", js_string(f.id()), js_string(f.label())))
            .collect()
    };

    fill(
        AI_LIB,
        &[
            ("PROVIDERS", &entries.join("\n")),
            ("DEFAULT", &js_string(default.id())),
            ("FEATURES", &features.join("\n")),
        ],
    )
}

/// SQL schema with row-level security. `subscriptions` only with payments.
pub fn schema(payments: bool) -> String {
    let mut sql = SCHEMA.to_string();
    if payments {
        sql.push('\n');
        sql.push_str(SUBSCRIPTIONS_SCHEMA);
    }
    sql
}

/// Edge function dispatching to the selected providers only
pub fn edge_function(providers: &BTreeSet<AiProvider>, default: AiProvider) -> String {
    let mut callers = Vec::new();
    let mut cases = Vec::new();
    for provider in providers {
        let (caller, function) = match provider {
            AiProvider::OpenAi => (CALL_OPENAI, "callOpenAI"),
            AiProvider::Anthropic => (CALL_ANTHROPIC, "callAnthropic"),
            AiProvider::Gemini => (CALL_GEMINI, "callGemini"),
        };
        callers.push(fill(caller, &[("MODEL", &js_string(provider.default_model()))]));
        cases.push(format!(
            "    case '{}':\n      return {}(prompt);",
            provider.id(),
            function
        ));
    }

    fill(
        EDGE_FUNCTION,
        &[
            ("CALLERS", callers.join("\n").trim_end()),
            ("CASES", &cases.join("\n")),
            ("DEFAULT", &js_string(default.id())),
        ],
    )
}

const AI_LIB: &str = r#"import { supabase } from './supabase';

export const PROVIDERS = {
  {{PROVIDERS}}
};

export const DEFAULT_PROVIDER = {{DEFAULT}};

export const FEATURES = [
{{FEATURES}}
];

export async function generate({ prompt, provider = DEFAULT_PROVIDER, feature = FEATURES[0].id }) {
  if (!PROVIDERS[provider]) {
    throw new Error(`Unknown AI provider: ${provider}`);
  }
  const { data, error } = await supabase.functions.invoke('generate', {
    body: { prompt, provider, feature },
  });
  if (error) {
    throw error;
  }
  return data;
}
"#;

const SCHEMA: &str = r#"-- Run in the Supabase SQL editor

create table if not exists public.profiles (
  id uuid primary key references auth.users on delete cascade,
  email text,
  credits integer not null default 100,
  created_at timestamptz not null default now()
);

create table if not exists public.generations (
  id uuid primary key default gen_random_uuid(),
  user_id uuid not null references auth.users on delete cascade,
  provider text not null,
  feature text not null,
  prompt text not null,
  output text,
  created_at timestamptz not null default now()
);

alter table public.profiles enable row level security;
alter table public.generations enable row level security;

create policy "Users read own profile" on public.profiles
  for select using (auth.uid() = id);

create policy "Users update own profile" on public.profiles
  for update using (auth.uid() = id);

create policy "Users read own generations" on public.generations
  for select using (auth.uid() = user_id);

create policy "Users insert own generations" on public.generations
  for insert with check (auth.uid() = user_id);

create or replace function public.handle_new_user()
returns trigger as $$
begin
  insert into public.profiles (id, email) values (new.id, new.email);
  return new;
end;
$$ language plpgsql security definer;

create or replace trigger on_auth_user_created
  after insert on auth.users
  for each row execute procedure public.handle_new_user();
"#;

const SUBSCRIPTIONS_SCHEMA: &str = r#"create table if not exists public.subscriptions (
  id uuid primary key default gen_random_uuid(),
  user_id uuid not null references auth.users on delete cascade,
  stripe_customer_id text,
  stripe_subscription_id text unique,
  price_id text,
  status text not null default 'inactive',
  current_period_end timestamptz,
  created_at timestamptz not null default now()
);

alter table public.subscriptions enable row level security;

create policy "Users read own subscription" on public.subscriptions
  for select using (auth.uid() = user_id);
"#;

const EDGE_FUNCTION: &str = r#"// Supabase edge function: `supabase functions deploy generate`
import { createClient } from 'https://esm.sh/@supabase/supabase-js@2';

const corsHeaders = {
  'Access-Control-Allow-Origin': '*',
  'Access-Control-Allow-Headers': 'authorization, x-client-info, apikey, content-type',
};

{{CALLERS}}

function dispatch(provider: string, prompt: string): Promise<string> {
  switch (provider) {
{{CASES}}
    default:
      throw new Error(`Provider not enabled: ${provider}`);
  }
}

Deno.serve(async (req) => {
  if (req.method === 'OPTIONS') {
    return new Response('ok', { headers: corsHeaders });
  }

  try {
    const { prompt, provider = {{DEFAULT}}, feature = 'text-generation' } = await req.json();
    const supabase = createClient(
      Deno.env.get('SUPABASE_URL')!,
      Deno.env.get('SUPABASE_ANON_KEY')!,
      { global: { headers: { Authorization: req.headers.get('Authorization')! } } }
    );

    const { data: { user } } = await supabase.auth.getUser();
    if (!user) {
      return new Response(JSON.stringify({ error: 'Unauthorized' }), {
        status: 401,
        headers: { ...corsHeaders, 'Content-Type': 'application/json' },
      });
    }

    const output = await dispatch(provider, prompt);
    const { data: generation } = await supabase
      .from('generations')
      .insert({ user_id: user.id, provider, feature, prompt, output })
      .select()
      .single();

    return new Response(JSON.stringify({ output, generation }), {
      headers: { ...corsHeaders, 'Content-Type': 'application/json' },
    });
  } catch (error) {
    return new Response(JSON.stringify({ error: String(error) }), {
      status: 500,
      headers: { ...corsHeaders, 'Content-Type': 'application/json' },
    });
  }
});
"#;

const CALL_OPENAI: &str = r#"async function callOpenAI(prompt: string): Promise<string> {
  const res = await fetch('https://api.openai.com/v1/chat/completions', {
    method: 'POST',
    headers: {
      Authorization: `Bearer ${Deno.env.get('OPENAI_API_KEY')}`,
      'Content-Type': 'application/json',
    },
    body: JSON.stringify({
      model: {{MODEL}},
      messages: [{ role: 'user', content: prompt }],
    }),
  });
  const json = await res.json();
  return json.choices?.[0]?.message?.content ?? '';
}
"#;

const CALL_ANTHROPIC: &str = r#"async function callAnthropic(prompt: string): Promise<string> {
  const res = await fetch('https://api.anthropic.com/v1/messages', {
    method: 'POST',
    headers: {
      'x-api-key': Deno.env.get('ANTHROPIC_API_KEY') ?? '',
      'anthropic-version': '2023-06-01',
      'Content-Type': 'application/json',
    },
    body: JSON.stringify({
      model: {{MODEL}},
      max_tokens: 1024,
      messages: [{ role: 'user', content: prompt }],
    }),
  });
  const json = await res.json();
  return json.content?.[0]?.text ?? '';
}
"#;

const CALL_GEMINI: &str = r#"async function callGemini(prompt: string): Promise<string> {
  const model = {{MODEL}};
  const key = Deno.env.get('GEMINI_API_KEY');
  const res = await fetch(
    `https://generativelanguage.googleapis.com/v1beta/models/${model}:generateContent?key=${key}`,
    {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ contents: [{ parts: [{ text: prompt }] }] }),
    }
  );
  const json = await res.json();
  return json.candidates?.[0]?.content?.parts?.[0]?.text ?? '';
}
"#;

const USE_GENERATION: &str = r#"import { useState } from 'react';
import { generate as callGenerate } from '../lib/ai';

export function useGeneration() {
  const [data, setData] = useState(null);
  const [loading, setLoading] = useState(false);
  const [error, setError] = useState(null);

  const generate = async (prompt, options = {}) => {
    setLoading(true);
    setError(null);
    try {
      const result = await callGenerate({ prompt, ...options });
      setData(result);
      return result;
    } catch (err) {
      setError(err.message ?? String(err));
      throw err;
    } finally {
      setLoading(false);
    }
  };

  const reset = () => {
    setData(null);
    setError(null);
  };

  {{RETURN}}
}
"#;

const USE_GENERATIONS: &str = r#"import { useCallback, useEffect, useState } from 'react';
import { supabase } from '../lib/supabase';

export function useGenerations(limit = 20) {
  const [data, setData] = useState([]);
  const [loading, setLoading] = useState(true);
  const [error, setError] = useState(null);

  const refresh = useCallback(async () => {
    setLoading(true);
    const { data: rows, error: err } = await supabase
      .from('generations')
      .select('*')
      .order('created_at', { ascending: false })
      .limit(limit);
    if (err) {
      setError(err.message);
    } else {
      setData(rows ?? []);
      setError(null);
    }
    setLoading(false);
  }, [limit]);

  useEffect(() => {
    refresh();
  }, [refresh]);

  {{RETURN}}
}
"#;
