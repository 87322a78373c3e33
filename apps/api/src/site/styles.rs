//! Inline stylesheet and enhancement script embedded in every generated page.

use crate::templates::models::TemplateColors;

pub const FONT_LINKS: &str = r#"    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&display=swap" rel="stylesheet">
"#;

/// `:root` custom properties. The five template colors are inserted verbatim.
pub fn root_variables(colors: &TemplateColors) -> String {
    format!(
        r#"        :root {{
            --primary-color: {primary};
            --secondary-color: {secondary};
            --accent-color: {accent};
            --background-color: {background};
            --text-color: {text};
            --text-light: #64748B;
            --border-color: #E2E8F0;
            --card-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
        }}
"#,
        primary = colors.primary,
        secondary = colors.secondary,
        accent = colors.accent,
        background = colors.background,
        text = colors.text,
    )
}

/// Everything after the `:root` block. Colors are referenced only through variables.
pub const BASE_STYLES: &str = r#"        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Inter', sans-serif;
            line-height: 1.6;
            color: var(--text-color);
            background: var(--background-color);
            -webkit-font-smoothing: antialiased;
            -moz-osx-font-smoothing: grayscale;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 20px;
        }

        /* Header Styles */
        .portfolio-header {
            background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));
            color: white;
            padding: 4rem 0;
            position: relative;
            overflow: hidden;
        }

        .header-overlay {
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            bottom: 0;
            background: rgba(0, 0, 0, 0.1);
        }

        .header-content {
            position: relative;
            display: flex;
            align-items: flex-end;
            gap: 2rem;
            flex-wrap: wrap;
        }

        .profile-image {
            width: 160px;
            height: 160px;
            border-radius: 50%;
            border: 4px solid white;
            box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
            overflow: hidden;
            background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 3rem;
            font-weight: bold;
            color: white;
        }

        .profile-image img {
            width: 100%;
            height: 100%;
            object-fit: cover;
        }

        .profile-info h1 {
            font-size: 2.5rem;
            font-weight: 800;
            margin-bottom: 0.5rem;
        }

        .profile-info .title {
            font-size: 1.25rem;
            opacity: 0.9;
            margin-bottom: 1rem;
        }

        /* Contact Info */
        .contact-info {
            padding: 2rem 0;
            border-bottom: 1px solid var(--border-color);
        }

        .contact-items {
            display: flex;
            flex-wrap: wrap;
            gap: 1.5rem;
            align-items: center;
        }

        .contact-item {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            color: var(--text-light);
        }

        .social-links {
            display: flex;
            gap: 0.75rem;
            margin-top: 1rem;
        }

        .social-link {
            width: 40px;
            height: 40px;
            border-radius: 10px;
            display: flex;
            align-items: center;
            justify-content: center;
            color: var(--primary-color);
            background: var(--border-color);
            text-decoration: none;
            transition: all 0.3s ease;
        }

        .social-link:hover {
            background: var(--primary-color);
            color: white;
            transform: translateY(-2px);
        }

        /* Main Content */
        .main-content {
            padding: 3rem 0;
        }

        section {
            margin-bottom: 3rem;
        }

        h2 {
            font-size: 1.75rem;
            font-weight: 700;
            margin-bottom: 1.5rem;
            color: var(--text-color);
            display: flex;
            align-items: center;
            gap: 0.5rem;
        }

        h2::before {
            content: '';
            width: 4px;
            height: 24px;
            background: var(--primary-color);
            border-radius: 2px;
        }

        /* Summary */
        .summary {
            font-size: 1.125rem;
            line-height: 1.8;
            color: var(--text-color);
            white-space: pre-line;
        }

        /* Experience Timeline */
        .timeline {
            position: relative;
            padding-left: 2rem;
        }

        .timeline::before {
            content: '';
            position: absolute;
            left: 0;
            top: 0;
            bottom: 0;
            width: 2px;
            background: var(--border-color);
        }

        .timeline-item {
            position: relative;
            margin-bottom: 2rem;
        }

        .timeline-dot {
            position: absolute;
            left: -2.25rem;
            top: 0;
            width: 16px;
            height: 16px;
            border-radius: 50%;
            border: 3px solid white;
            box-shadow: 0 0 0 3px var(--border-color);
        }

        .timeline-content h3 {
            font-size: 1.25rem;
            font-weight: 600;
            margin-bottom: 0.25rem;
        }

        .company {
            color: var(--primary-color);
            font-weight: 500;
            margin-bottom: 0.5rem;
        }

        .duration {
            font-size: 0.875rem;
            color: var(--text-light);
            margin-bottom: 0.75rem;
        }

        .description {
            color: var(--text-color);
            line-height: 1.6;
            white-space: pre-line;
        }

        /* Skills */
        .skills-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 1.5rem;
        }

        .skill-item {
            background: white;
            border-radius: 12px;
            padding: 1.5rem;
            box-shadow: var(--card-shadow);
            transition: transform 0.3s ease;
        }

        .skill-item:hover {
            transform: translateY(-4px);
        }

        .skill-header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 0.75rem;
        }

        .skill-name {
            font-weight: 600;
            color: var(--text-color);
        }

        .skill-level {
            font-size: 0.875rem;
            color: var(--text-light);
        }

        .skill-bar {
            height: 6px;
            background: var(--border-color);
            border-radius: 3px;
            overflow: hidden;
            margin-bottom: 0.5rem;
        }

        .skill-progress {
            height: 100%;
            border-radius: 3px;
            transition: width 1s ease;
        }

        .skill-category {
            font-size: 0.875rem;
            color: var(--text-light);
        }

        /* Projects */
        .projects-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(350px, 1fr));
            gap: 1.5rem;
        }

        .project-card {
            background: white;
            border-radius: 12px;
            overflow: hidden;
            box-shadow: var(--card-shadow);
            transition: all 0.3s ease;
        }

        .project-card:hover {
            transform: translateY(-4px);
            box-shadow: 0 10px 25px -5px rgba(0, 0, 0, 0.15);
        }

        .project-image {
            height: 200px;
            overflow: hidden;
        }

        .project-image img {
            width: 100%;
            height: 100%;
            object-fit: cover;
            transition: transform 0.5s ease;
        }

        .project-card:hover .project-image img {
            transform: scale(1.05);
        }

        .project-content {
            padding: 1.5rem;
        }

        .project-header {
            display: flex;
            justify-content: space-between;
            align-items: flex-start;
            margin-bottom: 1rem;
        }

        .project-content h3 {
            font-size: 1.25rem;
            font-weight: 600;
            color: var(--text-color);
        }

        .project-link {
            color: var(--primary-color);
            text-decoration: none;
            display: flex;
            align-items: center;
            justify-content: center;
            width: 32px;
            height: 32px;
            border-radius: 8px;
            background: var(--border-color);
            transition: all 0.3s ease;
        }

        .project-link:hover {
            background: var(--primary-color);
            color: white;
        }

        .project-description {
            color: var(--text-color);
            line-height: 1.6;
            margin-bottom: 1rem;
            white-space: pre-line;
        }

        .project-technologies {
            display: flex;
            flex-wrap: wrap;
            gap: 0.5rem;
        }

        .tech-tag {
            padding: 0.25rem 0.75rem;
            border-radius: 9999px;
            font-size: 0.75rem;
            font-weight: 500;
        }

        /* Education */
        .education-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 1.5rem;
        }

        .education-item {
            background: white;
            border-radius: 12px;
            padding: 1.5rem;
            box-shadow: var(--card-shadow);
        }

        .education-item h3 {
            font-size: 1.125rem;
            font-weight: 600;
            margin-bottom: 0.5rem;
        }

        .institution {
            color: var(--primary-color);
            font-weight: 500;
            margin-bottom: 0.5rem;
        }

        .education-year {
            font-size: 0.875rem;
            color: var(--text-light);
            margin-bottom: 0.75rem;
        }

        /* Footer */
        .portfolio-footer {
            background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));
            color: white;
            text-align: center;
            padding: 2rem 0;
            margin-top: 3rem;
        }

        .footer-content p {
            margin-bottom: 0.5rem;
        }

        .footer-content p:last-child {
            opacity: 0.8;
            font-size: 0.875rem;
        }

        /* Responsive Design */
        @media (max-width: 768px) {
            .header-content {
                flex-direction: column;
                align-items: flex-start;
            }

            .profile-image {
                width: 120px;
                height: 120px;
            }

            .profile-info h1 {
                font-size: 2rem;
            }

            .skills-grid,
            .projects-grid,
            .education-grid {
                grid-template-columns: 1fr;
            }

            .contact-items {
                flex-direction: column;
                align-items: flex-start;
            }
        }

        /* Print Styles */
        @media print {
            .social-links,
            .project-link,
            .portfolio-footer {
                display: none;
            }

            .container {
                max-width: 100%;
                padding: 0;
            }

            .portfolio-header {
                padding: 2rem 0;
            }

            .main-content {
                padding: 1rem 0;
            }

            .skill-item,
            .project-card,
            .education-item {
                box-shadow: none;
                border: 1px solid var(--border-color);
            }
        }
"#;

/// Smooth in-page scrolling, image load marking and print class toggling.
pub const ENHANCEMENT_SCRIPT: &str = r##"        // Smooth scrolling for in-page anchors
        document.querySelectorAll('a[href^="#"]').forEach(anchor => {
            anchor.addEventListener('click', function (e) {
                e.preventDefault();
                const target = document.querySelector(this.getAttribute('href'));
                if (target) {
                    target.scrollIntoView({ behavior: 'smooth' });
                }
            });
        });

        // Mark images once loaded
        document.addEventListener('DOMContentLoaded', function() {
            const images = document.querySelectorAll('img');
            images.forEach(img => {
                if (img.complete) {
                    img.classList.add('loaded');
                } else {
                    img.addEventListener('load', function() {
                        this.classList.add('loaded');
                    });
                }
            });
        });

        // Print class toggling
        window.addEventListener('beforeprint', function() {
            document.body.classList.add('printing');
        });

        window.addEventListener('afterprint', function() {
            document.body.classList.remove('printing');
        });
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_variables_inject_colors_verbatim() {
        let colors = TemplateColors {
            primary: "#111111".to_string(),
            secondary: "#222222".to_string(),
            accent: "#333333".to_string(),
            background: "#444444".to_string(),
            text: "#555555".to_string(),
        };
        let css = root_variables(&colors);
        assert!(css.contains("--primary-color: #111111;"));
        assert!(css.contains("--secondary-color: #222222;"));
        assert!(css.contains("--accent-color: #333333;"));
        assert!(css.contains("--background-color: #444444;"));
        assert!(css.contains("--text-color: #555555;"));
    }

    #[test]
    fn test_base_styles_use_variables_only() {
        assert!(!BASE_STYLES.contains(":root"));
        assert!(BASE_STYLES.contains("var(--primary-color)"));
        assert!(BASE_STYLES.contains("@media print"));
    }

    #[test]
    fn test_script_has_all_enhancements() {
        assert!(ENHANCEMENT_SCRIPT.contains("scrollIntoView"));
        assert!(ENHANCEMENT_SCRIPT.contains("classList.add('loaded')"));
        assert!(ENHANCEMENT_SCRIPT.contains("beforeprint"));
        assert!(ENHANCEMENT_SCRIPT.contains("afterprint"));
    }
}
