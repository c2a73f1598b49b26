pub const PAGE_STYLES: &str = r#"
/* Shared page headers */
.about-header,
.products-header,
.applications-header,
.contact-header,
.policy-header {
  background-color: var(--neutral-50);
  text-align: center;
  padding: var(--space-12) 0;
  border-bottom: 1px solid var(--neutral-200);
}

/* Home: hero */
.hero-section {
  position: relative;
  min-height: calc(100vh - var(--header-height));
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  color: var(--text-inverse);
}

.hero-background {
  position: absolute;
  inset: 0;
  background: linear-gradient(160deg, var(--neutral-900), var(--primary-dark));
  z-index: -1;
}

.hero-title {
  font-size: 3rem;
  margin-bottom: var(--space-4);
}

.hero-slogan {
  font-size: 1.25rem;
  max-width: 640px;
  margin: 0 auto var(--space-8);
  color: var(--neutral-200);
}

.scroll-indicator {
  position: absolute;
  bottom: var(--space-6);
  left: 50%;
  transform: translateX(-50%);
  font-size: 1.5rem;
  animation: bounce 2s infinite;
}

@keyframes bounce {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, 8px); }
}

/* Home: who we are */
.two-column-layout {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-8);
  align-items: center;
}

.content-column p {
  margin-bottom: var(--space-4);
}

/* Home + Products: cards */
.products-grid,
.products-main-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: var(--space-8);
}

.product-card,
.product-main-card {
  background-color: var(--background);
  border: 1px solid var(--neutral-200);
  border-radius: var(--radius-lg);
  overflow: hidden;
  transition: box-shadow var(--transition-fast) var(--easing-standard),
    transform var(--transition-fast) var(--easing-standard);
}

.product-card:hover,
.product-main-card:hover {
  box-shadow: var(--shadow-lg);
  transform: translateY(-4px);
}

.product-image,
.product-main-image {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 200px;
  background-color: var(--neutral-100);
  color: var(--text-secondary);
}

.product-info,
.product-main-info {
  padding: var(--space-6);
}

.product-info h3,
.product-main-info h2 {
  margin-bottom: var(--space-2);
}

.product-info p,
.product-main-info p {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

/* Home: quality banner */
.quality-banner {
  background: linear-gradient(120deg, var(--primary-dark), var(--primary));
  border-radius: var(--radius-lg);
  color: var(--text-inverse);
}

.quality-content {
  padding: var(--space-12);
}

.quality-points {
  list-style: none;
  margin: var(--space-4) 0 var(--space-6);
}

.quality-points li {
  padding: var(--space-1) 0;
}

/* Home + Contact: info grids */
.contact-info-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-6);
  margin-top: var(--space-6);
}

.contact-info-item,
.contact-info-card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-6);
  text-align: center;
  box-shadow: var(--shadow-sm);
}

.info-icon,
.info-card-icon {
  font-size: 1.75rem;
  margin-bottom: var(--space-2);
}

.info-card-content a {
  display: block;
  padding: var(--space-1) 0;
}

/* Home: FAQ accordion */
.faq-container {
  max-width: 760px;
  margin: 0 auto;
}

.faq-item {
  border: 1px solid var(--neutral-200);
  border-radius: var(--radius-md);
  margin-bottom: var(--space-3);
  overflow: hidden;
}

.faq-question {
  width: 100%;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: var(--space-4);
  background: none;
  border: none;
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
  text-align: left;
}

.faq-answer {
  max-height: 0;
  overflow: hidden;
  transition: max-height var(--transition-slow) var(--easing-standard);
}

.faq-item.active .faq-answer {
  max-height: 240px;
}

.faq-answer p {
  padding: 0 var(--space-4) var(--space-4);
  color: var(--text-secondary);
}

/* About */
.large-text {
  font-size: 1.125rem;
  margin-bottom: var(--space-4);
}

.about-image {
  border-radius: var(--radius-lg);
  margin: var(--space-6) auto 0;
}

.mission-vision-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: var(--space-8);
}

.mission-vision-card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-8);
  box-shadow: var(--shadow-sm);
}

.card-icon {
  font-size: 2rem;
  margin-bottom: var(--space-4);
}

.mission-vision-list {
  list-style: none;
  margin-top: var(--space-4);
}

.mission-vision-list li {
  padding: var(--space-2) 0;
  border-bottom: 1px solid var(--neutral-100);
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
  gap: var(--space-6);
  text-align: center;
}

.stat-card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-6);
}

.stat-number {
  font-size: 2rem;
  font-weight: 700;
  color: var(--primary);
}

.stat-label {
  color: var(--text-secondary);
}

/* Products: why choose us */
.products-additional-info {
  margin-top: var(--space-16);
  text-align: center;
}

.info-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-6);
  margin-top: var(--space-6);
}

.info-card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-6);
}

.info-card .info-icon {
  color: var(--success);
}

/* Product detail */
.back-button-section {
  padding: var(--space-6) 0 0;
}

.back-button {
  font-weight: 600;
}

.product-detail-header {
  text-align: center;
  padding: var(--space-8) 0;
}

.product-detail-content {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-8);
  align-items: center;
}

.detail-product-img {
  border-radius: var(--radius-lg);
}

.specifications-section {
  margin-top: var(--space-16);
}

.specifications-table {
  width: 100%;
  border-collapse: collapse;
}

.specifications-table th,
.specifications-table td {
  padding: var(--space-3) var(--space-4);
  border: 1px solid var(--neutral-200);
  text-align: left;
}

.specifications-table th {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.specifications-table tbody tr:hover {
  background-color: var(--neutral-50);
}

.property-cell {
  font-weight: 600;
}

.product-cta {
  margin-top: var(--space-16);
  text-align: center;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-8);
}

.product-cta p {
  margin: var(--space-2) 0 var(--space-6);
}

/* Applications */
.applications-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: var(--space-6);
}

.application-item {
  background-color: var(--background);
  border: 1px solid var(--neutral-200);
  border-radius: var(--radius-lg);
  overflow: hidden;
}

.application-item .application-image {
  min-height: 160px;
  display: flex;
}

.application-item .image-placeholder {
  flex: 1;
  border: none;
  border-radius: 0;
}

.application-info {
  padding: var(--space-4);
}

.application-info p {
  color: var(--text-secondary);
}

.applications-info-section {
  margin-top: var(--space-16);
  text-align: center;
}

.info-features {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-6);
  margin-top: var(--space-6);
}

.feature-box {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-6);
}

.feature-icon {
  font-size: 1.75rem;
}

/* Quality */
.quality-hero {
  background: linear-gradient(160deg, var(--neutral-800), var(--primary-dark));
  color: var(--text-inverse);
}

.quality-hero-content {
  padding: var(--space-16) var(--space-4);
  text-align: center;
}

.quality-hero-title {
  font-size: 2.5rem;
}

.quality-points-container {
  display: grid;
  gap: var(--space-4);
  max-width: 760px;
  margin: 0 auto;
}

.quality-point-card {
  display: flex;
  gap: var(--space-4);
  align-items: flex-start;
  background-color: var(--surface);
  border-radius: var(--radius-md);
  padding: var(--space-4);
}

.quality-point-icon {
  color: var(--success);
  font-weight: 700;
}

.quality-additional-info,
.quality-certifications {
  margin-top: var(--space-16);
  text-align: center;
}

.process-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-6);
  margin-top: var(--space-6);
}

.process-card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-6);
}

.process-number {
  width: 40px;
  height: 40px;
  margin: 0 auto var(--space-3);
  border-radius: 50%;
  background-color: var(--primary);
  color: var(--text-inverse);
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 700;
}

.certifications-grid {
  display: flex;
  justify-content: center;
  margin-top: var(--space-6);
}

.certification-card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-8);
  min-width: 240px;
}

.certification-badge {
  width: 56px;
  height: 56px;
  margin: 0 auto var(--space-3);
  border-radius: 50%;
  background-color: var(--primary);
  color: var(--text-inverse);
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 700;
}

/* Contact */
.social-media-section {
  margin-top: var(--space-12);
  text-align: center;
}

.social-links {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  margin-top: var(--space-4);
}

.social-link {
  padding: var(--space-2) var(--space-4);
  border: 1px solid var(--neutral-300);
  border-radius: var(--radius-md);
}

/* Policies */
.policy-main-icon {
  font-size: 2rem;
}

.last-updated {
  color: var(--text-secondary);
  font-size: 0.875rem;
  margin-top: var(--space-2);
}

.intro-text {
  max-width: 760px;
  margin: 0 auto;
  text-align: center;
  font-size: 1.125rem;
}

.policy-block {
  max-width: 760px;
  margin: 0 auto var(--space-8);
}

.policy-block h2 {
  margin-bottom: var(--space-3);
}

.policy-block p {
  color: var(--text-secondary);
}

.policy-list {
  margin: var(--space-3) 0 var(--space-3) var(--space-6);
  color: var(--text-secondary);
}

.note-text {
  font-style: italic;
}

.policy-contact {
  max-width: 760px;
  margin: var(--space-12) auto 0;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-8);
  text-align: center;
}

.contact-details {
  margin-top: var(--space-4);
}

.company-name,
.signature-name {
  font-weight: 700;
}

.contact-signature {
  margin-top: var(--space-4);
}

@media (max-width: 768px) {
  .two-column-layout,
  .product-detail-content {
    grid-template-columns: 1fr;
  }

  .hero-title {
    font-size: 2rem;
  }
}
"#;
