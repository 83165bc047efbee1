//! Storefront: filterable product grid and a cart with optional checkout

use super::fill;
use super::sections;
use super::ui::{self, Imports, Ui, Variant};
use crate::answers::AnswerSet;

pub const COMPONENT: &str = "Ecommerce";

pub fn render(ui: &Ui, answers: &AnswerSet) -> String {
    let mut imports = Imports::new();
    imports.named("react", &["useMemo", "useState"]);

    let account = sections::account(ui, &mut imports, answers);
    let checkout = sections::checkout(
        ui,
        &mut imports,
        answers,
        "Checkout",
        "{ quantity: itemCount }",
    );
    let upload = sections::upload(ui, &mut imports, answers, "products", "Product image");
    let products = sections::records(ui, &mut imports, answers, "products", "products", "", "SAMPLE_PRODUCTS");

    let add = ui::button(ui, &mut imports, "Add to Cart", "onClick={() => onAddToCart(product)}", Variant::Primary);
    let product_card = ui::card(
        ui,
        &mut imports,
        "",
        Some("{product.name}"),
        Some("{product.category}"),
        &fill(PRODUCT_BODY, &[("ADD", &add)]),
    );
    let product = ui::component("ProductCard", "{ product, onAddToCart }", "", &product_card, false);

    let remove = ui::button(ui, &mut imports, "Remove", "onClick={() => onRemove(item.id)}", Variant::Ghost);
    let cart_card = ui::card(
        ui,
        &mut imports,
        "",
        Some("Your Cart"),
        Some("{itemCount} item(s)"),
        &fill(
            CART_BODY,
            &[
                ("REMOVE", &remove),
                ("CHECKOUT", &sections::jsx_or(&checkout, "")),
            ],
        ),
    );
    let cart = ui::component(
        "CartSummary",
        "{ cart, onRemove }",
        &sections::join(&[CART_TOTALS, "", &sections::setup([&checkout])]),
        &cart_card,
        false,
    );

    let search = ui::input(
        ui,
        &mut imports,
        "type=\"search\" placeholder=\"Search products...\" value={searchTerm} onChange={(e) => setSearchTerm(e.target.value)}",
    );
    let category = ui::button(
        ui,
        &mut imports,
        "{category === 'all' ? 'All' : category}",
        "key={category} onClick={() => setSelectedCategory(category)} aria-pressed={selectedCategory === category}",
        Variant::Outline,
    );
    let upload_card = upload
        .as_ref()
        .map(|section| ui::card(ui, &mut imports, "", Some("Add product photos"), None, &section.jsx))
        .unwrap_or_default();

    let page_setup = sections::join(&[
        &sections::setup([&account]),
        "const [cart, setCart] = useState([]);",
        "const [searchTerm, setSearchTerm] = useState('');",
        "const [selectedCategory, setSelectedCategory] = useState('all');",
        &products,
        &sections::setup([&upload]),
        "",
        PAGE_LOGIC,
    ]);
    let main = fill(
        PAGE_JSX,
        &[
            ("NAME", &ui::jsx_text(answers.project_name())),
            ("ACCOUNT", &sections::jsx_or(&account, "")),
            ("SEARCH", &search),
            ("CATEGORY", &category),
            ("UPLOAD_CARD", &upload_card),
        ],
    );
    let page = ui::component(
        COMPONENT,
        "",
        &page_setup,
        &sections::protect(ui, &mut imports, answers, &main),
        true,
    );

    ui::module(ui, &imports, &[SAMPLE_DATA.to_string(), product, cart, page])
}

const SAMPLE_DATA: &str = r#"const SAMPLE_PRODUCTS = [
  { id: 'sku-1', name: 'Wireless Headphones', price: 99.99, category: 'Electronics', description: 'Noise-cancelling over-ear headphones.', emoji: '🎧' },
  { id: 'sku-2', name: 'Smart Watch', price: 199.99, category: 'Electronics', description: 'Health tracking and notifications on your wrist.', emoji: '⌚' },
  { id: 'sku-3', name: 'Coffee Maker', price: 79.99, category: 'Home', description: 'Programmable coffee maker for the perfect brew.', emoji: '☕' },
  { id: 'sku-4', name: 'Running Shoes', price: 129.99, category: 'Sports', description: 'Comfortable running shoes for all terrains.', emoji: '👟' },
  { id: 'sku-5', name: 'Laptop Stand', price: 49.99, category: 'Electronics', description: 'Ergonomic aluminium laptop stand.', emoji: '💻' },
  { id: 'sku-6', name: 'Yoga Mat', price: 29.99, category: 'Sports', description: 'Non-slip mat for comfortable practice.', emoji: '🧘' },
];

const formatPrice = (value) => `$${Number(value).toFixed(2)}`;"#;

const PRODUCT_BODY: &str = r#"<div style={{ height: '160px', background: '#f3f4f6', borderRadius: '0.375rem', display: 'flex', alignItems: 'center', justifyContent: 'center', fontSize: '3rem', marginBottom: '1rem' }}>
  {product.imageUrl ? <img src={product.imageUrl} alt={product.name} style={{ maxHeight: '100%' }} /> : product.emoji || '📦'}
</div>
<p style={{ color: '#6b7280', marginBottom: '1rem' }}>{product.description}</p>
<div style={{ display: 'flex', alignItems: 'center', justifyContent: 'space-between' }}>
  <span style={{ fontSize: '1.5rem', fontWeight: 'bold', color: '#059669' }}>{formatPrice(product.price)}</span>
  {{ADD}}
</div>"#;

const CART_TOTALS: &str = r#"const itemCount = cart.reduce((sum, item) => sum + item.quantity, 0);
const total = cart.reduce((sum, item) => sum + item.price * item.quantity, 0);"#;

const CART_BODY: &str = r#"{cart.length === 0 ? (
  <p style={{ color: '#6b7280' }}>Your cart is empty.</p>
) : (
  <div style={{ display: 'flex', flexDirection: 'column', gap: '0.75rem' }}>
    {cart.map((item) => (
      <div key={item.id} style={{ display: 'flex', alignItems: 'center', justifyContent: 'space-between', gap: '0.5rem' }}>
        <span>{item.emoji} {item.name} × {item.quantity}</span>
        <span>{formatPrice(item.price * item.quantity)}</span>
        {{REMOVE}}
      </div>
    ))}
    <div style={{ display: 'flex', justifyContent: 'space-between', fontWeight: 'bold', borderTop: '1px solid #e5e7eb', paddingTop: '0.75rem' }}>
      <span>Total</span>
      <span>{formatPrice(total)}</span>
    </div>
    {{CHECKOUT}}
  </div>
)}"#;

const PAGE_LOGIC: &str = r#"const categories = useMemo(
  () => ['all', ...new Set(products.map((p) => p.category))],
  [products]
);

const filteredProducts = products.filter((product) => {
  const matchesSearch = product.name.toLowerCase().includes(searchTerm.toLowerCase());
  const matchesCategory = selectedCategory === 'all' || product.category === selectedCategory;
  return matchesSearch && matchesCategory;
});

const addToCart = (product) => {
  setCart((current) => {
    const existing = current.find((item) => item.id === product.id);
    if (existing) {
      return current.map((item) =>
        item.id === product.id ? { ...item, quantity: item.quantity + 1 } : item
      );
    }
    return [...current, { ...product, quantity: 1 }];
  });
};

const removeFromCart = (id) => setCart((current) => current.filter((item) => item.id !== id));"#;

const PAGE_JSX: &str = r#"<div style={{ minHeight: '100vh', background: '#f9fafb' }}>
  <header style={{ background: 'white', borderBottom: '1px solid #e5e7eb', padding: '1rem 2rem', display: 'flex', justifyContent: 'space-between', alignItems: 'center' }}>
    <h1 style={{ fontSize: '1.5rem', fontWeight: 'bold' }}>{{NAME}}</h1>
    {{ACCOUNT}}
  </header>

  <div style={{ maxWidth: '1280px', margin: '0 auto', padding: '2rem', display: 'flex', gap: '2rem', alignItems: 'flex-start' }}>
    <main style={{ flex: 1 }}>
      <div style={{ display: 'flex', flexDirection: 'column', gap: '1rem', marginBottom: '2rem' }}>
        {{SEARCH}}
        <div style={{ display: 'flex', flexWrap: 'wrap', gap: '0.5rem' }}>
          {categories.map((category) => (
            {{CATEGORY}}
          ))}
        </div>
      </div>

      {filteredProducts.length === 0 ? (
        <p style={{ textAlign: 'center', color: '#6b7280', padding: '2rem' }}>No products match your filters.</p>
      ) : (
        <div style={{ display: 'grid', gridTemplateColumns: 'repeat(auto-fill, minmax(260px, 1fr))', gap: '1.5rem' }}>
          {filteredProducts.map((product) => (
            <ProductCard key={product.id} product={product} onAddToCart={addToCart} />
          ))}
        </div>
      )}
    </main>

    <aside style={{ width: '320px', display: 'flex', flexDirection: 'column', gap: '1.5rem' }}>
      <CartSummary cart={cart} onRemove={removeFromCart} />
      {{UPLOAD_CARD}}
    </aside>
  </div>
</div>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Answers, CssFramework, FirebaseService, Framework, Template};

    fn render_with(css: CssFramework, payments: bool, services: &[FirebaseService]) -> String {
        let mut answers = Answers::new("Shop", Framework::Vite, Template::Ecommerce, css);
        answers.include_payments = payments;
        answers.firebase_services.extend(services.iter().copied());
        let answers = answers.finalize().unwrap();
        render(&Ui::new(&answers), &answers)
    }

    #[test]
    fn test_checkout_only_with_payments() {
        let without = render_with(CssFramework::Tailwind, false, &[]);
        assert!(!without.contains("useCheckout"));
        assert!(!without.contains("startCheckout"));

        let with = render_with(CssFramework::Tailwind, true, &[]);
        assert!(with.contains("import { useCheckout } from '../hooks/useCheckout';"));
        assert!(with.contains("startCheckout({ quantity: itemCount })"));
    }

    #[test]
    fn test_database_products_keep_sample_fallback() {
        let page = render_with(CssFramework::ReactBootstrap, false, &[FirebaseService::Database]);
        assert!(page.contains("const { data: productsDocs } = useCollection('products');"));
        assert!(page.contains("productsDocs.length > 0 ? productsDocs : SAMPLE_PRODUCTS"));
    }

    #[test]
    fn test_renderings_are_exclusive() {
        let library = render_with(CssFramework::TailwindShadcn, true, &[FirebaseService::Storage]);
        assert!(library.contains("import { Button } from '@/components/ui/button';"));
        assert!(library.contains("import { Progress } from '@/components/ui/progress';"));
        assert!(!library.contains("<button"));
        assert!(!library.contains("<input"));

        let plain = render_with(CssFramework::Mui, true, &[FirebaseService::Storage]);
        assert!(!plain.contains("@/components/ui"));
        assert!(plain.contains("<input id=\"upload\" type=\"file\""));
    }
}
