//! CSS for the landing page.
//!
//! One stylesheet serves both the exported static page and the WASM
//! landing. Keyframes referenced by [`crate::motion`] are defined here.
//!
//! # Customization
//!
//! ```rust
//! use agro_page::styles::PAGE_CSS;
//!
//! let my_css = ".feature-card { border-radius: 4px; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete CSS for the page - green/blue field palette.
pub const PAGE_CSS: &str = r#"
:root {
    --green-50: #f0fdf4;
    --green-100: #dcfce7;
    --green-500: #22c55e;
    --green-600: #16a34a;
    --green-700: #15803d;
    --green-800: #166534;
    --blue-50: #eff6ff;
    --white: #ffffff;
    --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);
    --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
    --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1);
    --radius: 0.5rem;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    margin: 0;
    line-height: 1.5;
}

/* Layout */
.page {
    min-height: 100vh;
    background: linear-gradient(to bottom, var(--green-50), var(--blue-50));
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 3rem 1rem;
}

.section {
    margin-bottom: 5rem;
}

.section-panel {
    background: var(--white);
    border-radius: var(--radius);
    box-shadow: var(--shadow-lg);
    padding: 2rem;
}

.section-title {
    font-size: 1.875rem;
    font-weight: 600;
    color: var(--green-800);
    text-align: center;
    margin: 0 0 2rem;
}

/* Hero */
.hero {
    text-align: center;
    margin-bottom: 4rem;
}

.hero-title {
    font-size: 2.25rem;
    font-weight: 700;
    color: var(--green-800);
    margin: 0 0 1rem;
}

.hero-subtitle {
    font-size: 1.25rem;
    color: var(--green-700);
    margin: 0;
}

/* Feature grid */
.features-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}

@media (min-width: 768px) {
    .features-grid { grid-template-columns: repeat(2, 1fr); }
    .benefits-list { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .features-grid { grid-template-columns: repeat(3, 1fr); }
}

.feature-card {
    background: var(--white);
    border-radius: var(--radius);
    box-shadow: var(--shadow-lg);
    padding: 1.5rem;
    cursor: pointer;
    height: 100%;
    transition: all 0.3s ease-in-out;
}

.feature-card:hover,
.feature-card:focus-visible {
    transform: scale(1.05);
    box-shadow: var(--shadow-xl);
    outline: none;
}

.feature-title {
    display: flex;
    align-items: center;
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--green-700);
    margin: 0 0 1rem;
}

.feature-icon {
    display: inline-flex;
    background: var(--green-100);
    color: var(--green-600);
    padding: 0.5rem;
    border-radius: 9999px;
    margin-right: 0.75rem;
}

.feature-description {
    color: var(--green-600);
    margin: 0;
}

/* Dialog */
.dialog-backdrop {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.8);
    animation: fade-in 0.2s ease-out both;
}

.dialog {
    position: relative;
    width: calc(100% - 2rem);
    max-width: 425px;
    background: var(--green-50);
    border-radius: var(--radius);
    box-shadow: var(--shadow-lg);
    padding: 1.5rem;
}

.dialog-title {
    font-size: 1.125rem;
    font-weight: 600;
    color: var(--green-800);
    margin: 0;
}

.dialog-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    border: none;
    background: transparent;
    color: var(--green-700);
    cursor: pointer;
    opacity: 0.7;
}

.dialog-close:hover {
    opacity: 1;
}

.dialog-body {
    display: grid;
    gap: 1rem;
    padding: 1rem 0;
}

.dialog-list-title {
    font-size: 1.125rem;
    font-weight: 600;
    color: var(--green-700);
    margin: 0 0 0.5rem;
}

.dialog-list {
    list-style: disc;
    padding-left: 1.25rem;
    margin: 0;
    color: var(--green-600);
}

.dialog-list li + li {
    margin-top: 0.25rem;
}

/* Benefits */
.benefits-list {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1rem;
    list-style: none;
    padding: 0;
    margin: 0;
}

.benefit {
    display: flex;
    align-items: center;
    color: var(--green-700);
}

.benefit-bullet {
    color: var(--green-500);
    margin-right: 0.5rem;
    flex-shrink: 0;
}

/* Process */
.process-list {
    list-style: none;
    padding: 0;
    margin: 0;
}

.process-step {
    background: var(--white);
    border-radius: var(--radius);
    box-shadow: var(--shadow-md);
    padding: 1.5rem;
}

.process-step + .process-step {
    margin-top: 1.5rem;
}

.process-title {
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--green-700);
    margin: 0 0 0.5rem;
}

.process-description {
    color: var(--green-600);
    margin: 0;
}

/* Call to action */
.cta {
    text-align: center;
}

.cta .section-title {
    margin-bottom: 1.5rem;
}

.cta-motion {
    display: inline-block;
    transition: transform 0.15s ease-out;
}

.cta-motion:hover {
    transform: scale(var(--hover-scale));
}

.cta-motion:active {
    transform: scale(var(--tap-scale));
}

.btn-primary {
    font-size: 1.125rem;
    font-weight: 500;
    padding: 1.5rem 2rem;
    border: none;
    border-radius: var(--radius);
    background: var(--green-600);
    color: var(--white);
    cursor: pointer;
}

.btn-primary:hover {
    background: var(--green-700);
}

/* Motion */
@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes enter {
    from {
        opacity: 0;
        transform: translate(var(--enter-x, 0), var(--enter-y, 0));
    }
    to {
        opacity: 1;
        transform: translate(0, 0);
    }
}

@media (prefers-reduced-motion: reduce) {
    *, *::before, *::after {
        animation: none !important;
        transition: none !important;
    }
}
"#;

/// Content Security Policy for the exported page: no scripts, inline styles only.
pub const CSP: &str = "default-src 'none'; img-src 'self' data:; style-src 'unsafe-inline'; font-src 'self' data:;";
