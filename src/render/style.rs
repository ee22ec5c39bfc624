//! Embedded stylesheet
//!
//! The hero enters once with a fade and a 12px upward slide (`hero-enter`).
//! Nothing waits on it and it does not repeat.

pub const STYLESHEET: &str = r#"
*,*::before,*::after{box-sizing:border-box}
html{scroll-behavior:smooth}
body{margin:0;min-height:100vh;background:#f8fafc;color:#334155;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;line-height:1.5}
a{color:inherit}
.container{max-width:72rem;margin:0 auto;padding:0 1.5rem}
.site-header{position:sticky;top:0;z-index:50;width:100%;border-bottom:1px solid #e2e8f0;background:rgba(255,255,255,.8);backdrop-filter:blur(8px)}
.site-header .container{display:flex;align-items:center;justify-content:space-between;padding-top:.75rem;padding-bottom:.75rem}
.brand{font-size:.875rem;font-weight:600;color:#0f172a;text-decoration:none}
.nav{display:none;gap:1.5rem}
.nav a{font-size:.875rem;color:#334155;text-decoration:none}
.nav a:hover{color:#0f172a}
@media (min-width:768px){.nav{display:flex}.grid{grid-template-columns:repeat(2,minmax(0,1fr))}.hero h1{font-size:2.25rem}}
.hero{padding-top:3rem;animation:hero-enter .5s ease-out 1 both}
.hero h1{margin:0;font-size:1.875rem;font-weight:700;letter-spacing:-.025em;color:#0f172a}
.hero p{margin-top:1rem;max-width:48rem}
@keyframes hero-enter{from{opacity:0;transform:translateY(12px)}to{opacity:1;transform:translateY(0)}}
@media (prefers-reduced-motion:reduce){.hero{animation:none}}
.actions{margin-top:1.5rem;display:flex;flex-wrap:wrap;gap:.75rem}
.btn{border-radius:1rem;padding:.5rem 1rem;font-size:.875rem;font-weight:500;text-decoration:none}
.btn-primary{background:#0f172a;color:#fff}
.btn-primary:hover{background:#1e293b}
.btn-outline{border:1px solid #cbd5e1;color:#0f172a}
.btn-outline:hover{background:#f1f5f9}
.section{scroll-margin-top:6rem;padding:3rem 0}
.section h2{margin:0;font-size:1.5rem;font-weight:600;letter-spacing:-.025em;color:#0f172a}
.section-body{margin-top:1.5rem}
.grid{display:grid;gap:1.5rem}
.stack>*+*{margin-top:1rem}
.card{border:1px solid #e2e8f0;border-radius:1rem;background:#fff;padding:1.25rem}
.card-head{display:flex;align-items:center;justify-content:space-between;gap:.75rem}
.card h3{margin:0;font-size:1.125rem;font-weight:600;color:#0f172a}
.card h4{margin:0;font-size:1rem;font-weight:600;color:#0f172a}
.card p{margin:.5rem 0 0;font-size:.875rem}
.bullets{margin:.75rem 0 0;padding-left:1.25rem;font-size:.875rem}
.tags,.links{margin-top:1rem;display:flex;flex-wrap:wrap;gap:.5rem}
.links a{font-size:.875rem;font-weight:500;color:#0f172a;text-underline-offset:4px}
.links a:hover{text-decoration:none}
.badge{display:inline-flex;align-items:center;border:1px solid #e2e8f0;border-radius:9999px;padding:.25rem .625rem;font-size:.75rem;font-weight:500;color:#334155}
.site-footer{border-top:1px solid #e2e8f0;padding:2.5rem 0;text-align:center;font-size:.75rem;color:#64748b}
"#;
