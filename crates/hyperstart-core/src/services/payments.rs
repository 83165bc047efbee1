//! Stripe checkout: client loader, checkout hook and serverless session handler

use crate::config::{merge_env_example, EnvSection};
use crate::error::Result;
use crate::project::{FileSink, Layout, Project};
use crate::runtime::{CommandRunner, Invocation};
use crate::templates::fill;
use crate::templates::ui::hook_return;

pub const PACKAGES: &[&str] = &["@stripe/stripe-js", "stripe"];

pub async fn install<S: FileSink, R: CommandRunner>(
    project: &mut Project<S>,
    runner: &mut R,
    enabled: bool,
) -> Result<()> {
    if !enabled {
        return Ok(());
    }
    let layout = project.layout();

    runner
        .run(&Invocation::npm_install(PACKAGES.iter().copied(), false).in_dir(project.root()))
        .await?;

    project.write("src/lib/stripe.js", &stripe_client(layout))?;
    project.write(
        "src/hooks/useCheckout.js",
        &format!(
            "{}{}",
            layout.client_directive(),
            fill(USE_CHECKOUT, &[("RETURN", &hook_return(&["startCheckout"]))])
        ),
    )?;
    project.write("api/create-checkout-session.js", CHECKOUT_HANDLER)?;

    let section = EnvSection::new("Stripe")
        .note("Dashboard > Developers > API keys")
        .var(layout.env_key("STRIPE_PUBLISHABLE_KEY"), "pk_test_your_key")
        .var(layout.env_key("STRIPE_PRICE_ID"), "price_your_price_id")
        .var(layout.env_key("CHECKOUT_URL"), "/api/create-checkout-session")
        .note("Server-side only, never expose to the browser")
        .var("STRIPE_SECRET_KEY", "sk_test_your_key");
    merge_env_example(project, &section)?;

    Ok(())
}

fn stripe_client(layout: Layout) -> String {
    format!(
        "import {{ loadStripe }} from '@stripe/stripe-js';\n\n\
         export const stripePromise = loadStripe({});\n\n\
         export const PRICE_ID = {};\n\n\
         export const CHECKOUT_URL = {} || '/api/create-checkout-session';\n",
        layout.env_access("STRIPE_PUBLISHABLE_KEY"),
        layout.env_access("STRIPE_PRICE_ID"),
        layout.env_access("CHECKOUT_URL"),
    )
}

const USE_CHECKOUT: &str = r#"import { useState } from 'react';
import { CHECKOUT_URL, PRICE_ID } from '../lib/stripe';

export function useCheckout() {
  const [data, setData] = useState(null);
  const [loading, setLoading] = useState(false);
  const [error, setError] = useState(null);

  const startCheckout = async ({ priceId = PRICE_ID, quantity = 1, mode = 'payment' } = {}) => {
    setLoading(true);
    setError(null);
    try {
      const res = await fetch(CHECKOUT_URL, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ priceId, quantity, mode, origin: window.location.origin }),
      });
      const session = await res.json();
      if (!res.ok) {
        throw new Error(session.error || 'Checkout failed');
      }
      setData(session);
      window.location.assign(session.url);
      return session;
    } catch (err) {
      setError(err.message);
      throw err;
    } finally {
      setLoading(false);
    }
  };

  {{RETURN}}
}
"#;

const CHECKOUT_HANDLER: &str = r#"import Stripe from 'stripe';

const stripe = new Stripe(process.env.STRIPE_SECRET_KEY);

export default async function handler(req, res) {
  if (req.method !== 'POST') {
    res.setHeader('Allow', 'POST');
    return res.status(405).json({ error: 'Method not allowed' });
  }

  try {
    const { priceId, quantity = 1, mode = 'payment', origin } = req.body;
    const session = await stripe.checkout.sessions.create({
      mode,
      line_items: [{ price: priceId, quantity }],
      success_url: `${origin}/?checkout=success`,
      cancel_url: `${origin}/?checkout=cancelled`,
    });
    return res.status(200).json({ id: session.id, url: session.url });
  } catch (error) {
    return res.status(500).json({ error: error.message });
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Framework;
    use crate::config::env::{parse_keys, ENV_EXAMPLE};
    use crate::project::MemorySink;
    use crate::runtime::RecordingRunner;

    #[tokio::test]
    async fn test_disabled_is_noop() {
        let mut project = Project::new("app", Layout::for_framework(Framework::Vite), MemorySink::new());
        let mut runner = RecordingRunner::new();
        install(&mut project, &mut runner, false).await.unwrap();
        assert!(runner.invocations().is_empty());
        assert!(project.changes().is_empty());
    }

    #[tokio::test]
    async fn test_install_writes_checkout_files() {
        let mut project = Project::new("app", Layout::for_framework(Framework::Vite), MemorySink::new());
        let mut runner = RecordingRunner::new();
        install(&mut project, &mut runner, true).await.unwrap();

        assert_eq!(runner.commands(), vec!["npm install @stripe/stripe-js stripe"]);
        assert!(project.exists("api/create-checkout-session.js"));
        assert!(project
            .read("src/lib/stripe.js")
            .unwrap()
            .contains("loadStripe(import.meta.env.VITE_STRIPE_PUBLISHABLE_KEY)"));

        let keys = parse_keys(&project.read(ENV_EXAMPLE).unwrap());
        assert!(keys.contains("VITE_STRIPE_PRICE_ID"));
        assert!(keys.contains("STRIPE_SECRET_KEY"));
        assert!(!keys.contains("VITE_STRIPE_SECRET_KEY"));
    }
}
