pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #1D4ED8;          /* Industrial brand blue */
  --primary-light: #3B82F6;    /* Hover states */
  --primary-dark: #1E40AF;     /* Active states */
  --secondary: #0F766E;        /* Teal for secondary actions */
  --accent: #F59E0B;           /* Amber highlights */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Semantic Colors */
  --success: #10B981;
  --error: #EF4444;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --surface: var(--neutral-50);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;

  /* Spacing Scale */
  --space-1: 0.25rem;
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-6: 1.5rem;
  --space-8: 2rem;
  --space-12: 3rem;
  --space-16: 4rem;

  /* Layout */
  --header-height: 64px;
  --radius-md: 8px;
  --radius-lg: 12px;

  /* Elevation */
  --shadow-sm: 0 1px 2px rgba(17, 24, 39, 0.08);
  --shadow-md: 0 4px 12px rgba(17, 24, 39, 0.12);
  --shadow-lg: 0 12px 32px rgba(17, 24, 39, 0.16);

  /* Motion */
  --transition-fast: 150ms;
  --transition-slow: 600ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
}
"#;
