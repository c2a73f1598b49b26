pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-block;
  padding: var(--space-3) var(--space-6);
  border: none;
  border-radius: var(--radius-md);
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
    transform var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  transform: translateY(-1px);
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--neutral-100);
  color: var(--primary);
  border: 1px solid var(--primary);
}

.btn-secondary:hover {
  background-color: var(--neutral-200);
}

.btn:disabled {
  background-color: var(--neutral-300);
  color: var(--neutral-500);
  cursor: not-allowed;
  transform: none;
}

/* Section headings */
.section-title {
  font-size: 2rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: var(--space-8);
}

.section-subtitle {
  text-align: center;
  color: var(--text-secondary);
  max-width: 640px;
  margin: 0 auto var(--space-8);
}

.page-title {
  font-size: 2.5rem;
  font-weight: 700;
}

.page-subtitle {
  color: var(--text-secondary);
  font-size: 1.125rem;
  margin-top: var(--space-2);
}

/* Navbar */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  background-color: var(--background);
  z-index: 100;
  transition: box-shadow var(--transition-fast) var(--easing-standard);
}

.navbar.scrolled {
  box-shadow: var(--shadow-md);
}

.navbar-container {
  max-width: 1140px;
  margin: 0 auto;
  height: 100%;
  padding: 0 var(--space-4);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.navbar-logo {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.logo-img {
  height: 36px;
}

.logo-text {
  font-weight: 700;
  font-size: 1.125rem;
  color: var(--text-primary);
}

.nav-menu {
  display: flex;
  list-style: none;
  gap: var(--space-2);
}

.nav-link {
  display: block;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  color: var(--text-secondary);
  font-weight: 500;
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--neutral-100);
}

.nav-link.active {
  color: var(--primary);
  border-bottom: 2px solid var(--primary);
  border-radius: 0;
}

.menu-icon {
  display: none;
  background: none;
  border: none;
  font-size: 1.5rem;
  cursor: pointer;
  color: var(--text-primary);
}

@media (max-width: 768px) {
  .menu-icon {
    display: block;
  }

  .nav-menu {
    position: fixed;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 0;
    background-color: var(--background);
    box-shadow: var(--shadow-md);
    max-height: 0;
    overflow: hidden;
    transition: max-height var(--transition-slow) var(--easing-standard);
  }

  .nav-menu.active {
    max-height: 420px;
  }

  .nav-menu .nav-link {
    padding: var(--space-4);
    border-bottom: 1px solid var(--neutral-100);
  }
}

/* Footer */
.footer {
  background-color: var(--neutral-900);
  color: var(--neutral-300);
  margin-top: var(--space-16);
}

.footer-container {
  max-width: 1140px;
  margin: 0 auto;
  padding: var(--space-12) var(--space-4);
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: var(--space-8);
}

.footer-heading {
  color: var(--text-inverse);
  margin-bottom: var(--space-4);
}

.footer-links {
  list-style: none;
}

.footer-links a {
  color: var(--neutral-300);
  display: block;
  padding: var(--space-1) 0;
}

.footer-links a:hover {
  color: var(--text-inverse);
}

.footer-contact .contact-item {
  display: flex;
  gap: var(--space-2);
  margin-bottom: var(--space-3);
}

.footer-contact a {
  color: var(--neutral-300);
  display: block;
}

.social-icons {
  display: flex;
  gap: var(--space-4);
  margin-top: var(--space-4);
}

.social-icons a {
  color: var(--neutral-300);
}

.footer-bottom {
  border-top: 1px solid var(--neutral-700);
}

.footer-bottom-container {
  max-width: 1140px;
  margin: 0 auto;
  padding: var(--space-4);
  display: flex;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: var(--space-2);
  font-size: 0.875rem;
}

.footer-bottom-links a {
  color: var(--neutral-300);
}

.footer-bottom-links .separator {
  margin: 0 var(--space-2);
  color: var(--neutral-600);
}

/* Scroll reveal */
.fade-in {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-slow) var(--easing-standard),
    transform var(--transition-slow) var(--easing-standard);
}

.fade-in.visible {
  opacity: 1;
  transform: translateY(0);
}

/* Forms */
.form-container {
  max-width: 720px;
  margin: 0 auto;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-8);
  box-shadow: var(--shadow-sm);
}

.form-heading {
  text-align: center;
}

.form-subheading {
  text-align: center;
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.contact-form {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
}

.form-group.full-width,
.form-actions {
  grid-column: 1 / -1;
}

.form-group label {
  font-weight: 600;
}

.form-group .required {
  color: var(--error);
}

.form-group input,
.form-group textarea {
  padding: var(--space-3);
  border: 1px solid var(--neutral-300);
  border-radius: var(--radius-md);
  font-size: 1rem;
  font-family: inherit;
}

.form-group input:focus,
.form-group textarea:focus {
  outline: 2px solid var(--primary-light);
  border-color: var(--primary);
}

.form-group input.error,
.form-group textarea.error {
  border-color: var(--error);
}

.error-message {
  color: var(--error);
  font-size: 0.875rem;
}

.form-actions {
  text-align: center;
}

/* Status banners */
.alert {
  grid-column: 1 / -1;
  padding: var(--space-4);
  border-radius: var(--radius-md);
  text-align: center;
}

.alert-success {
  background-color: rgba(16, 185, 129, 0.12);
  color: var(--success);
}

.alert-error {
  background-color: rgba(239, 68, 68, 0.12);
  color: var(--error);
}

/* Placeholders for missing imagery */
.placeholder-image,
.image-placeholder,
.detail-placeholder-image {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 220px;
  background-color: var(--neutral-100);
  border: 1px dashed var(--neutral-300);
  border-radius: var(--radius-md);
  color: var(--text-secondary);
  text-align: center;
  padding: var(--space-4);
}

@media (max-width: 768px) {
  .contact-form {
    grid-template-columns: 1fr;
  }
}
"#;
