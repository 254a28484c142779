//! Landing page route.
//!
//! Serves the marketing page at `/`: hero, process steps, pricing tiers,
//! FAQs and the project brief form. The page is rendered on the server from
//! [`LandingContent`]; an inline script keeps the form state and posts it to
//! `/api/leads`.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderValue, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use auraio_core::content::{Faq, LandingContent, PricingTier, ProcessStep};
use auraio_core::form::{CONFIRMATION_MESSAGE, FormField, UNKNOWN_ERROR};

use crate::state::AppState;

/// Build the UI router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(landing_page))
}

async fn landing_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=300"),
        )],
        Html(render_landing(&state.content)),
    )
}

/// Render the full landing page.
#[must_use]
pub fn render_landing(content: &LandingContent<'_>) -> String {
    let mut html = String::with_capacity(24 * 1024);
    html.push_str(LANDING_HEAD);
    html.push_str(LANDING_HERO);

    html.push_str(
        "<section id=\"process\" class=\"section\">\n<h2>Onboarding, simplified</h2>\n<div class=\"grid grid-4\">\n",
    );
    for (index, step) in content.steps.iter().enumerate() {
        push_step(&mut html, index, step);
    }
    html.push_str("</div>\n</section>\n");

    html.push_str(
        "<section id=\"tiers\" class=\"section\">\n<h2>Plans that scale with you</h2>\n\
         <p class=\"lead\">Pick a starting point, upgrade any time. WaaS (Website-as-a-Service) available on all tiers.</p>\n\
         <div class=\"grid grid-4\">\n",
    );
    for tier in content.tiers {
        push_tier(&mut html, tier);
    }
    html.push_str("</div>\n</section>\n");

    html.push_str(LANDING_CTA);

    html.push_str(
        "<section id=\"start\" class=\"section split\">\n<div>\n<h2>Tell us about your project</h2>\n\
         <p class=\"lead\">This quick brief helps us estimate timeline &amp; budget precisely. We&apos;ll reply within one business day.</p>\n",
    );
    push_form(&mut html);
    html.push_str("</div>\n<div class=\"aside\">\n");
    html.push_str(LANDING_WHY);
    html.push_str("<div class=\"card\">\n<h3>FAQs</h3>\n");
    for faq in content.faqs {
        push_faq(&mut html, faq);
    }
    html.push_str("</div>\n</div>\n</section>\n");

    html.push_str(LANDING_FOOTER);
    html.push_str(
        &LANDING_SCRIPT
            .replace("{{CONFIRMATION}}", &js_string(CONFIRMATION_MESSAGE))
            .replace("{{UNKNOWN_ERROR}}", &js_string(UNKNOWN_ERROR)),
    );
    html.push_str("</body></html>\n");
    html
}

fn push_step(html: &mut String, index: usize, step: &ProcessStep) {
    html.push_str(&format!(
        "<div class=\"card\"><span class=\"badge\">Step {}</span><h3>{}</h3><p>{}</p></div>\n",
        index.saturating_add(1),
        escape_html(step.title),
        escape_html(step.description),
    ));
}

fn push_tier(html: &mut String, tier: &PricingTier) {
    let class = if tier.featured { "card tier featured" } else { "card tier" };
    html.push_str(&format!(
        "<div class=\"{class}\">\n<div class=\"tier-head\"><h3>{}</h3>",
        escape_html(tier.label),
    ));
    if tier.featured {
        html.push_str("<span class=\"badge badge-hot\">Most Popular</span>");
    }
    html.push_str(&format!(
        "</div>\n<div class=\"muted\">{}</div>\n<div class=\"price\">{}</div>\n<ul>\n",
        escape_html(tier.name),
        escape_html(tier.price),
    ));
    for bullet in tier.bullets {
        html.push_str(&format!("<li>{}</li>\n", escape_html(bullet)));
    }
    html.push_str(&format!(
        "</ul>\n<a href=\"#start\" class=\"btn btn-primary btn-block\">Choose {}</a>\n</div>\n",
        escape_html(tier.name),
    ));
}

fn push_faq(html: &mut String, faq: &Faq) {
    html.push_str(&format!(
        "<details><summary>{}</summary><p>{}</p></details>\n",
        escape_html(faq.question),
        escape_html(faq.answer),
    ));
}

/// Label, placeholder and input type for each form field.
const fn field_spec(field: FormField) -> (&'static str, &'static str, &'static str) {
    match field {
        FormField::Name => ("Your name", "Anurag Chavan", "text"),
        FormField::Email => ("Email", "you@company.com", "email"),
        FormField::Company => ("Company", "AuraIO", "text"),
        FormField::WebsiteType => ("Website type", "E-commerce, SaaS, portfolio, etc.", "text"),
        FormField::Budget => ("Budget (EUR)", "e.g., 3000", "text"),
        FormField::Timeline => ("Timeline", "e.g., 3–4 weeks", "text"),
        FormField::Goals => (
            "Goals",
            "What success looks like for you (e.g., launch MVP, increase leads, boost SEO).",
            "textarea",
        ),
    }
}

fn push_form(html: &mut String) {
    html.push_str("<form id=\"lead-form\" class=\"form\" novalidate>\n<div class=\"fields\">\n");
    for field in FormField::ALL {
        let (label, placeholder, kind) = field_spec(field);
        let key = field.key();
        let wide = if kind == "textarea" { " wide" } else { "" };
        html.push_str(&format!(
            "<label class=\"field{wide}\" for=\"f-{key}\"><span>{}</span>",
            escape_html(label)
        ));
        if kind == "textarea" {
            html.push_str(&format!(
                "<textarea id=\"f-{key}\" name=\"{key}\" data-field=\"{key}\" placeholder=\"{}\"></textarea>",
                escape_html(placeholder)
            ));
        } else {
            html.push_str(&format!(
                "<input id=\"f-{key}\" name=\"{key}\" type=\"{kind}\" data-field=\"{key}\" placeholder=\"{}\"/>",
                escape_html(placeholder)
            ));
        }
        html.push_str("</label>\n");
    }
    html.push_str(
        "</div>\n<label class=\"check\"><input id=\"f-updates\" name=\"updates\" type=\"checkbox\" data-field=\"updates\" checked/>\
         <span>Send me product updates &amp; case studies</span></label>\n\
         <button type=\"submit\" class=\"btn btn-primary\">Submit Brief &rarr;</button>\n\
         <p id=\"form-status\" class=\"status\" role=\"status\" aria-live=\"polite\"></p>\n</form>\n",
    );
}

/// Escape text for use in HTML element content and quoted attributes.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Quote a string as a JavaScript literal that is safe inside `<script>`.
fn js_string(text: &str) -> String {
    serde_json::to_string(text)
        .unwrap_or_else(|_| "\"\"".to_owned())
        .replace('<', "\\u003c")
}

const LANDING_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>AuraIO &mdash; Websites that radiate growth</title>
<meta name="description" content="AuraIO builds high-performance, SEO-ready websites and growth systems for startups and modern brands."/>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--bg:#020617;--panel:rgba(255,255,255,.05);--border:rgba(255,255,255,.1);--text:#e2e8f0;--muted:#94a3b8;--cyan:#22d3ee;--fuchsia:#d946ef;--font:-apple-system,BlinkMacSystemFont,'Inter','Segoe UI',sans-serif}
body{font-family:var(--font);background:linear-gradient(180deg,#020617,#0f172a 50%,#020617);color:var(--text);line-height:1.6;-webkit-font-smoothing:antialiased;overflow-x:hidden}
a{color:inherit;text-decoration:none}
.nav{position:sticky;top:0;z-index:40;backdrop-filter:blur(8px);background:rgba(15,23,42,.6);border-bottom:1px solid var(--border)}
.nav-inner{max-width:1100px;margin:0 auto;padding:12px 24px;display:flex;align-items:center;justify-content:space-between}
.logo{display:flex;align-items:center;gap:10px;font-weight:600;letter-spacing:.02em}
.logo-mark{width:36px;height:36px;border-radius:14px;display:grid;place-items:center;background:linear-gradient(135deg,var(--cyan),var(--fuchsia));color:#fff;font-weight:800}
.nav-links{display:flex;align-items:center;gap:16px;font-size:14px}
.nav-links a:hover{color:#fff}
.section{max-width:1100px;margin:0 auto;padding:40px 24px}
.hero{display:grid;grid-template-columns:1fr 1fr;gap:32px;align-items:center;padding-top:64px}
.hero h1{font-size:52px;line-height:1.1;font-weight:600}
.hero h1 span{background:linear-gradient(90deg,var(--cyan),var(--fuchsia));-webkit-background-clip:text;background-clip:text;color:transparent}
.hero p{margin-top:16px;color:#cbd5e1;max-width:60ch}
.hero-actions{margin-top:24px;display:flex;gap:12px;flex-wrap:wrap}
.trust{margin-top:24px;display:flex;gap:24px;font-size:14px;color:#cbd5e1}
h2{font-size:30px;font-weight:600;margin-bottom:16px}
h3{font-size:18px;font-weight:600;margin:8px 0}
.lead{color:#cbd5e1;margin-bottom:24px}
.muted{color:var(--muted);font-size:14px}
.grid{display:grid;gap:16px}
.grid-4{grid-template-columns:repeat(4,1fr)}
.card{background:var(--panel);border:1px solid var(--border);border-radius:20px;padding:24px}
.card p{color:#cbd5e1;font-size:14px}
.badge{display:inline-block;border-radius:999px;padding:2px 10px;font-size:12px;background:rgba(255,255,255,.1);color:#fff}
.badge-hot{background:linear-gradient(90deg,var(--cyan),var(--fuchsia));font-weight:500}
.tier-head{display:flex;align-items:center;justify-content:space-between;gap:8px}
.tier.featured{border-color:rgba(232,121,249,.4);background:rgba(217,70,239,.1)}
.price{font-size:24px;font-weight:600;margin:12px 0}
.tier ul{list-style:none;font-size:14px;margin-bottom:16px}
.tier li{padding:4px 0 4px 22px;position:relative}
.tier li::before{content:'\2713';position:absolute;left:0;color:var(--cyan)}
.btn{display:inline-flex;align-items:center;justify-content:center;gap:6px;padding:10px 22px;border-radius:16px;font-size:14px;font-weight:600;font-family:var(--font);border:none;cursor:pointer;transition:all .2s}
.btn-primary{background:#f8fafc;color:#0f172a}.btn-primary:hover{background:#e2e8f0}
.btn-secondary{background:rgba(255,255,255,.1);color:#fff}.btn-secondary:hover{background:rgba(255,255,255,.2)}
.btn-block{width:100%}
.cta{display:flex;align-items:center;justify-content:space-between;gap:16px;background:linear-gradient(90deg,rgba(6,182,212,.15),rgba(192,38,211,.15))}
.split{display:grid;grid-template-columns:1fr 1fr;gap:24px;align-items:start}
.aside{display:flex;flex-direction:column;gap:24px}
.fields{display:grid;grid-template-columns:1fr 1fr;gap:16px}
.field{display:flex;flex-direction:column;gap:4px;font-size:14px;color:#cbd5e1}
.field.wide{grid-column:1/-1}
.field input,.field textarea{background:rgba(255,255,255,.1);border:1px solid var(--border);border-radius:10px;padding:10px 12px;color:#f1f5f9;font:inherit}
.field textarea{min-height:120px;resize:vertical}
.check{display:flex;align-items:center;gap:8px;margin:16px 0;font-size:14px;color:#cbd5e1}
.status{margin-top:12px;font-size:14px;min-height:1.4em}
.status.ok{color:#67e8f9}.status.err{color:#f0abfc}
details{border-bottom:1px solid var(--border);padding:12px 0}
summary{cursor:pointer;font-weight:500}
details p{margin-top:8px}
.footer{border-top:1px solid var(--border);margin-top:48px}
.footer-inner{max-width:1100px;margin:0 auto;padding:32px 24px;display:flex;justify-content:space-between;font-size:14px;color:#cbd5e1}
.footer-inner nav{display:flex;gap:16px}
@media(max-width:768px){.hero,.split,.fields{grid-template-columns:1fr}.grid-4{grid-template-columns:1fr}.hero h1{font-size:36px}.nav-links{display:none}.cta{flex-direction:column}}
</style></head>
<body>
"##;

const LANDING_HERO: &str = r##"<nav class="nav"><div class="nav-inner">
  <div class="logo"><div class="logo-mark">&infin;</div>AuraIO <span class="badge">Onboarding</span></div>
  <div class="nav-links">
    <a href="#process">Process</a>
    <a href="#tiers">Tiers</a>
    <a href="#faq">FAQ</a>
    <a href="#start">Start</a>
    <a href="#start" class="btn btn-primary">Get Started</a>
  </div>
</div></nav>
<section id="hero" class="section hero">
  <div>
    <span class="badge">&#10022; Websites that radiate growth</span>
    <h1>Launch your next <span>website</span> with measurable impact.</h1>
    <p>AuraIO builds high-performance, SEO-ready websites and growth systems for startups and modern brands. From concept to launch, in weeks, not months.</p>
    <div class="hero-actions">
      <a href="#start" class="btn btn-primary">Start Onboarding &rarr;</a>
      <a href="#tiers" class="btn btn-secondary">See Plans</a>
    </div>
    <div class="trust"><span>GDPR-ready</span><span>Sub-2s loads</span><span>Global CDN</span></div>
  </div>
  <div class="card">
    <h3>Quick Quote Preview</h3>
    <div class="grid" style="grid-template-columns:1fr 1fr;margin-top:12px">
      <div class="card"><div class="muted">Tier</div><div>Website + SEO</div></div>
      <div class="card"><div class="muted">Timeline</div><div>3&ndash;4 weeks</div></div>
      <div class="card"><div class="muted">Est. Cost</div><div>&euro;2.5k&ndash;&euro;3.2k</div></div>
      <div class="card"><div class="muted">Performance</div><div>&#10003; 90+ Lighthouse</div></div>
    </div>
    <p style="margin-top:16px">Transparent scope &amp; milestones included</p>
  </div>
</section>
"##;

const LANDING_CTA: &str = r##"<section class="section">
  <div class="card cta">
    <div><h3>Ready to radiate online?</h3><p>Book a 20-minute discovery call and get a tailored roadmap.</p></div>
    <a href="#start" class="btn btn-primary">Start Onboarding</a>
  </div>
</section>
"##;

const LANDING_WHY: &str = r##"<div class="card">
  <h3>Why AuraIO</h3>
  <p><b>Performance-first.</b> Sub-2s loads, 90+ Lighthouse, WCAG-friendly, SEO-ready.</p>
  <p><b>Design that converts.</b> We pair aesthetics with analytics and iterate fast.</p>
  <p><b>Transparent growth dashboards.</b> See SEO, speed and lead metrics in one place.</p>
</div>
<a id="faq"></a>
"##;

const LANDING_FOOTER: &str = r##"<footer class="footer"><div class="footer-inner">
  <span>&infin; &copy; AuraIO. All rights reserved.</span>
  <nav><a href="#">Privacy</a><a href="#">Terms</a><a href="#start">Contact</a></nav>
</div></footer>
"##;

/// Form state and submission for the brief form.
///
/// The state is a flat object owned by this page; each edit replaces one
/// key. Success resets it, failure keeps it.
const LANDING_SCRIPT: &str = r##"<script>
(() => {
  const CONFIRMATION = {{CONFIRMATION}};
  const UNKNOWN_ERROR = {{UNKNOWN_ERROR}};
  const initial = () => ({ name: "", email: "", company: "", websiteType: "", budget: "", goals: "", timeline: "", updates: true });
  let state = initial();

  const form = document.getElementById("lead-form");
  const status = document.getElementById("form-status");

  const render = () => {
    for (const input of form.querySelectorAll("[data-field]")) {
      const key = input.dataset.field;
      if (input.type === "checkbox") { input.checked = state[key]; } else { input.value = state[key]; }
    }
  };

  const onEdit = (event) => {
    const key = event.target.dataset ? event.target.dataset.field : undefined;
    if (!key) { return; }
    const value = event.target.type === "checkbox" ? event.target.checked : event.target.value;
    state = { ...state, [key]: value };
  };
  form.addEventListener("input", onEdit);
  form.addEventListener("change", onEdit);

  const show = (text, ok) => {
    status.textContent = text;
    status.className = "status " + (ok ? "ok" : "err");
  };

  form.addEventListener("submit", async (event) => {
    event.preventDefault();
    try {
      const res = await fetch("/api/leads", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify(state),
      });
      const json = await res.json().catch(() => ({}));
      if (!res.ok) {
        throw new Error((json && json.error) || res.statusText);
      }
      show(CONFIRMATION, true);
      state = initial();
      render();
    } catch (err) {
      const message = (err instanceof Error && err.message) || UNKNOWN_ERROR;
      show("Failed to submit: " + message, false);
    }
  });

  render();
})();
</script>
"##;
