use leptos::prelude::*;

use crate::content::{
    Certification, ContactLink, ExpertiseTag, Profile, Project, Publication, SkillLevel,
};

const BUILD_YEAR: &str = env!("BUILD_YEAR");
const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center justify-center pt-16">
            <div class="container mx-auto px-4 text-center">
                <p class="text-sm uppercase tracking-widest text-primary mb-4">"Hello, I'm"</p>
                <h1 class="text-5xl md:text-7xl font-bold mb-6">{profile.name()}</h1>
                <h2 class="text-2xl md:text-3xl text-foreground/80 mb-6">{profile.headline()}</h2>
                <p class="max-w-2xl mx-auto text-lg text-foreground/60 mb-10">{profile.tagline()}</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a href="#projects" class="px-6 py-3 rounded-md bg-primary text-background font-medium">
                        "View Projects"
                    </a>
                    <a href="#contact" class="px-6 py-3 rounded-md border border-primary/40 font-medium">
                        "Get in Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id="projects" class="py-20">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">"Projects"</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects
                        .iter()
                        .map(|project| view! { <ProjectCard project=project.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="glass-card p-6 rounded-lg flex flex-col">
            <h3 class="text-xl font-bold mb-2">{project.title().to_string()}</h3>
            <p class="text-foreground/70 mb-4 flex-grow">{project.description().to_string()}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tech()
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="tech-tag px-2 py-1 rounded-md bg-primary/10 text-primary text-sm">
                                {tech.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <ExternalLink href=project.link().as_str().to_string()>
                <i class="devicon-github-plain mr-2"></i>
                "View Project"
            </ExternalLink>
        </article>
    }
}

#[component]
pub fn Skills(skills: &'static [SkillLevel], expertise: &'static [ExpertiseTag]) -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-foreground/5">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">"Skills"</h2>
                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <h3 class="text-xl font-semibold">"Languages & Frameworks"</h3>
                        {skills
                            .iter()
                            .map(|skill| view! { <SkillBar skill=skill.clone() /> })
                            .collect_view()}
                    </div>
                    <div>
                        <h3 class="text-xl font-semibold mb-6">"Expertise"</h3>
                        <div class="grid grid-cols-2 gap-4">
                            {expertise
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <div class="expertise-tag glass-card p-4 rounded-lg text-center">
                                            {tag.name()}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillBar(skill: SkillLevel) -> impl IntoView {
    let style = skill.bar_style();
    view! {
        <div>
            <div class="flex justify-between mb-2">
                <span class="font-medium">{skill.name().to_string()}</span>
                <span class="text-foreground/60">{format!("{}%", skill.level())}</span>
            </div>
            <div
                class="h-2 w-full rounded-full bg-foreground/10"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=skill.level().to_string()
            >
                <div class="skill-bar-fill h-2 rounded-full bg-primary" style=style></div>
            </div>
        </div>
    }
}

#[component]
pub fn Publications(publication: &'static Publication) -> impl IntoView {
    view! {
        <section id="publications" class="py-20">
            <div class="container mx-auto px-4 max-w-3xl">
                <h2 class="text-3xl font-bold text-center mb-12">"Publications"</h2>
                <article class="glass-card p-6 rounded-lg">
                    <h3 class="text-xl font-bold mb-1">{publication.title()}</h3>
                    <p class="text-sm text-primary mb-4">{publication.venue()}</p>
                    <p class="text-foreground/70 mb-4">{publication.description()}</p>
                    <ExternalLink href=publication.link().as_str().to_string()>
                        "Read More"
                    </ExternalLink>
                </article>
            </div>
        </section>
    }
}

#[component]
pub fn Certifications(certifications: &'static [Certification]) -> impl IntoView {
    view! {
        <section id="certifications" class="py-20 bg-foreground/5">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">"Certifications"</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {certifications
                        .iter()
                        .map(|cert| {
                            view! {
                                <article class="certification glass-card p-6 rounded-lg">
                                    <h3 class="text-lg font-bold mb-2">{cert.title()}</h3>
                                    <p class="text-foreground/60 mb-4">{cert.issuer()}</p>
                                    <ExternalLink href=cert.link().as_str().to_string()>
                                        "View Certificate"
                                    </ExternalLink>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Contact(contacts: &'static [ContactLink]) -> impl IntoView {
    view! {
        <section id="contact" class="py-20">
            <div class="container mx-auto px-4 text-center">
                <h2 class="text-3xl font-bold mb-6">"Get in Touch"</h2>
                <p class="max-w-xl mx-auto text-foreground/70 mb-8">
                    "Open to collaboration, interesting projects and conversations."
                </p>
                <div class="flex justify-center gap-6">
                    {contacts
                        .iter()
                        .map(|contact| {
                            view! {
                                <a
                                    href=contact.link().as_str().to_string()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="contact-link text-3xl hover:text-primary transition-colors duration-200"
                                    aria-label=contact.label()
                                >
                                    <i class=contact.icon().icon_class()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    view! {
        <footer class="py-8 text-center text-foreground/60" title=format!("Built {BUILD_TIME}")>
            <div class="container mx-auto px-4">
                <p>{format!("© {BUILD_YEAR} {}. All rights reserved.", profile.copyright_holder())}</p>
            </div>
        </footer>
    }
}

/// Anchor that opens in a new browsing context.
#[component]
fn ExternalLink(href: String, children: Children) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="inline-flex items-center text-primary hover:underline"
        >
            {children()}
        </a>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
        Owner::new().with(|| f().to_html())
    }

    #[test]
    fn test_logis_renders_three_tags() {
        let project = Project::new(
            "LOGIS",
            "A system for managing goods and tracking orders.",
            ["Java", "Spring Boot", "React"],
            "https://github.com/sandeepchinnam/SDP3-LOGIS",
        )
        .unwrap();
        let html = render(move || view! { <ProjectCard project=project /> });
        assert_eq!(html.matches("class=\"tech-tag").count(), 3);
        for tech in ["Java", "Spring Boot", "React"] {
            assert!(html.contains(tech), "missing tag {tech}: {html}");
        }
        assert!(html.contains("href=\"https://github.com/sandeepchinnam/SDP3-LOGIS\""));
        assert!(html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_tag_count_matches_tech_for_all_projects() {
        let portfolio = crate::content::portfolio().unwrap();
        for project in portfolio.projects() {
            let expected = project.tech().len();
            let project = project.clone();
            let html = render(move || view! { <ProjectCard project=project /> });
            assert_eq!(html.matches("class=\"tech-tag").count(), expected);
        }
    }

    #[test]
    fn test_skill_bar_width() {
        let skill = SkillLevel::new("Django", 85).unwrap();
        let html = render(move || view! { <SkillBar skill=skill /> });
        assert!(html.contains("width: 85%"), "{html}");
        assert!(html.contains("aria-valuenow=\"85\""));
    }

    #[test]
    fn test_sections_render_anchors() {
        let portfolio = crate::content::portfolio().unwrap();
        let html = render(move || {
            view! {
                <Hero profile=portfolio.profile() />
                <Projects projects=portfolio.projects() />
                <Skills skills=portfolio.skills() expertise=portfolio.expertise() />
                <Contact contacts=portfolio.contacts() />
            }
        });
        for anchor in ["id=\"home\"", "id=\"projects\"", "id=\"skills\"", "id=\"contact\""] {
            assert!(html.contains(anchor), "missing {anchor}");
        }
        assert_eq!(
            html.matches("class=\"expertise-tag").count(),
            portfolio.expertise().len()
        );
        assert_eq!(
            html.matches("class=\"contact-link").count(),
            portfolio.contacts().len()
        );
    }

    #[test]
    fn test_certifications_and_publication() {
        let portfolio = crate::content::portfolio().unwrap();
        let html = render(move || {
            view! {
                <Publications publication=portfolio.publication() />
                <Certifications certifications=portfolio.certifications() />
            }
        });
        assert_eq!(
            html.matches("class=\"certification ").count(),
            portfolio.certifications().len()
        );
        for cert in portfolio.certifications() {
            assert!(html.contains(cert.issuer()));
        }
        assert!(html.contains(portfolio.publication().title()));
    }
}
