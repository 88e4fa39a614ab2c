use crate::theme::{build_css_variables, ThemeTokens};

const FONT_IMPORT: &str = "@import url('https://fonts.googleapis.com/css2?family=Orbitron:wght@400;500;700;900&family=Space+Mono:wght@400;700&display=swap');";

/// Full page stylesheet for one token set. Every themed rule reads a custom
/// property, so the `:root` block is the only place colors appear.
pub fn stylesheet(tokens: &ThemeTokens) -> String {
    format!("{}\n{}\n{}", FONT_IMPORT, build_css_variables(tokens), RULES)
}

const RULES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Space Mono', monospace;
    background: var(--bg);
    color: var(--text);
    overflow-x: hidden;
    transition: all 0.3s ease;
}
::selection { background: var(--accent); color: var(--bg); }
::-webkit-scrollbar { width: 8px; }
::-webkit-scrollbar-track { background: var(--bg-alt); }
::-webkit-scrollbar-thumb { background: var(--accent); border-radius: 4px; }
html { scroll-behavior: smooth; }

@keyframes fadeInUp { from { opacity: 0; transform: translateY(30px); } to { opacity: 1; transform: translateY(0); } }
@keyframes float { 0%, 100% { transform: translateY(0px); } 50% { transform: translateY(-20px); } }
@keyframes glow {
    0%, 100% { box-shadow: 0 0 20px var(--accent); }
    50% { box-shadow: 0 0 40px var(--accent), 0 0 60px var(--accent); }
}

.container { max-width: 1200px; margin: 0 auto; padding: 0 20px; }

.navbar {
    position: fixed; top: 0; left: 0; right: 0; z-index: 1000;
    backdrop-filter: blur(10px);
    background: var(--card-ee);
    border-bottom: 1px solid var(--border);
    padding: 20px 0;
    transition: all 0.3s ease;
}
.navbar .container { display: flex; justify-content: space-between; align-items: center; }
.logo {
    font-family: 'Orbitron', sans-serif; font-size: 24px; font-weight: 900;
    background: linear-gradient(135deg, var(--accent), var(--accent-alt));
    -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text;
    cursor: pointer; text-decoration: none;
}
.nav-links { display: flex; gap: 30px; align-items: center; }
@media (max-width: 768px) { .nav-links { display: none; } }
.nav-link {
    color: var(--text-alt); text-decoration: none; font-size: 14px; font-weight: 700;
    text-transform: uppercase; letter-spacing: 1px; transition: all 0.3s ease; cursor: pointer;
}
.nav-link:hover { color: var(--accent); transform: translateY(-2px); }
.theme-toggle {
    background: var(--card); border: 2px solid var(--accent); color: var(--accent);
    width: 40px; height: 40px; border-radius: 50%; cursor: pointer;
    display: flex; align-items: center; justify-content: center;
    font-size: 20px; text-decoration: none; transition: all 0.3s ease;
}
.theme-toggle:hover { transform: rotate(180deg); box-shadow: 0 0 20px var(--accent); }

.hero {
    min-height: 100vh; display: flex; align-items: center; justify-content: center;
    position: relative; overflow: hidden; padding: 100px 0 50px;
}
.hero::before, .hero::after { content: ''; position: absolute; border-radius: 50%; opacity: 0.1; }
.hero::before {
    width: 500px; height: 500px; background: var(--accent); filter: blur(150px);
    top: -200px; right: -200px; animation: float 6s ease-in-out infinite;
}
.hero::after {
    width: 400px; height: 400px; background: var(--accent-alt); filter: blur(120px);
    bottom: -150px; left: -150px; animation: float 8s ease-in-out infinite;
}
.hero-content { text-align: center; z-index: 1; animation: fadeInUp 1s ease; }
.hero-title {
    font-family: 'Orbitron', sans-serif; font-size: clamp(48px, 8vw, 96px); font-weight: 900;
    margin-bottom: 20px; line-height: 1.1;
    background: linear-gradient(135deg, var(--text), var(--accent));
    -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text;
}
.hero-subtitle {
    font-size: clamp(20px, 3vw, 32px); color: var(--accent); margin-bottom: 30px;
    font-weight: 700; text-transform: uppercase; letter-spacing: 2px;
}
.hero-description {
    font-size: 18px; color: var(--text-alt); max-width: 600px; margin: 0 auto 40px; line-height: 1.8;
}
.button-group { display: flex; gap: 20px; justify-content: center; flex-wrap: wrap; }
.button {
    padding: 15px 35px; background: transparent; border: 2px solid var(--accent);
    color: var(--accent); text-decoration: none; font-weight: 700; text-transform: uppercase;
    letter-spacing: 1px; border-radius: 50px; transition: all 0.3s ease; cursor: pointer;
    font-size: 14px; display: inline-block;
}
.button:hover {
    transform: translateY(-3px); box-shadow: 0 10px 30px var(--accent-40);
    background: linear-gradient(135deg, var(--accent), var(--accent-alt)); color: var(--bg);
}
.button-primary { background: linear-gradient(135deg, var(--accent), var(--accent-alt)); color: var(--bg); }

.section { padding: 100px 0; position: relative; }
.section-title {
    font-family: 'Orbitron', sans-serif; font-size: clamp(36px, 5vw, 56px); font-weight: 900;
    text-align: center; margin-bottom: 60px; position: relative;
    background: linear-gradient(135deg, var(--text), var(--accent));
    -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text;
}
.section-title::after {
    content: ''; position: absolute; bottom: -20px; left: 50%; transform: translateX(-50%);
    width: 100px; height: 4px; border-radius: 2px;
    background: linear-gradient(90deg, var(--accent), var(--accent-alt));
}

.about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 60px; align-items: center; }
@media (max-width: 768px) { .about-grid { grid-template-columns: 1fr; gap: 40px; } }
.about-text h3 { font-family: 'Orbitron', sans-serif; font-size: 28px; color: var(--accent); margin-bottom: 20px; }
.about-text p { font-size: 16px; line-height: 1.8; color: var(--text-alt); margin-bottom: 20px; }
.about-stats { display: grid; grid-template-columns: repeat(2, 1fr); gap: 20px; }

.stat-card, .skill-category, .timeline-card, .project-card {
    background: var(--card); border: 2px solid var(--border); border-radius: 20px;
    padding: 30px; transition: all 0.3s ease;
}
.stat-card { text-align: center; }
.stat-card:hover, .skill-category:hover {
    border-color: var(--accent); transform: translateY(-5px); box-shadow: 0 10px 40px var(--accent-20);
}
.stat-card h4 { font-family: 'Orbitron', sans-serif; font-size: 36px; color: var(--accent); margin-bottom: 10px; }
.stat-card p { color: var(--text-alt); font-size: 14px; text-transform: uppercase; letter-spacing: 1px; }

.skills-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 30px; }
.skill-category h3 {
    font-family: 'Orbitron', sans-serif; font-size: 20px; color: var(--accent); margin-bottom: 20px;
    display: flex; align-items: center; gap: 10px;
}
.skill-category h3::before { content: '//'; color: var(--accent-alt); }
.skill-tags { display: flex; flex-wrap: wrap; gap: 10px; }
.skill-tag {
    background: var(--bg-alt); color: var(--text); padding: 8px 16px; border-radius: 20px;
    font-size: 13px; font-weight: 700; border: 1px solid var(--border); transition: all 0.3s ease;
}
.skill-tag:hover { background: var(--accent); color: var(--bg); transform: translateY(-2px); }

.timeline { position: relative; padding-left: 40px; }
.timeline::before {
    content: ''; position: absolute; left: 0; top: 0; bottom: 0; width: 2px;
    background: linear-gradient(180deg, var(--accent), var(--accent-alt));
}
.timeline-item { position: relative; margin-bottom: 50px; padding-left: 40px; }
.timeline-item::before {
    content: ''; position: absolute; left: -46px; top: 0; width: 16px; height: 16px;
    background: var(--accent); border: 4px solid var(--bg); border-radius: 50%;
    box-shadow: 0 0 20px var(--accent);
}
.timeline-item:hover::before { animation: glow 2s ease-in-out infinite; }
.timeline-card:hover { border-color: var(--accent); transform: translateX(10px); box-shadow: 0 10px 40px var(--accent-20); }
.timeline-card h3 { font-family: 'Orbitron', sans-serif; font-size: 22px; color: var(--text); margin-bottom: 10px; }
.timeline-card h4 { color: var(--accent); font-size: 16px; margin-bottom: 10px; font-weight: 700; }
.timeline-card .period { color: var(--text-alt); font-size: 14px; margin-bottom: 15px; font-weight: 700; }
.timeline-card ul { list-style: none; margin-top: 15px; }
.timeline-card li { color: var(--text-alt); margin-bottom: 10px; padding-left: 20px; position: relative; }
.timeline-card li::before { content: '\25B9'; position: absolute; left: 0; color: var(--accent); font-size: 18px; }

.projects-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(350px, 1fr)); gap: 30px; }
@media (max-width: 768px) { .projects-grid { grid-template-columns: 1fr; } }
.project-card { cursor: pointer; }
.project-card:hover { border-color: var(--accent); transform: translateY(-10px); box-shadow: 0 20px 60px var(--accent-30); }
.project-card h3 { font-family: 'Orbitron', sans-serif; font-size: 22px; color: var(--text); margin-bottom: 15px; }
.project-card p { color: var(--text-alt); font-size: 14px; line-height: 1.6; margin-bottom: 20px; }
.tech-stack { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 20px; }
.tech-badge {
    background: var(--bg-alt); color: var(--accent); padding: 5px 12px; border-radius: 15px;
    font-size: 11px; font-weight: 700; border: 1px solid var(--border);
}
.project-links { display: flex; gap: 15px; }
.project-link {
    color: var(--accent); text-decoration: none; font-size: 14px; font-weight: 700;
    display: flex; align-items: center; gap: 5px; transition: all 0.3s ease;
}
.project-link:hover { color: var(--accent-alt); transform: translateX(5px); }

.contact-section { padding: 100px 0; text-align: center; }
.contact-content { max-width: 600px; margin: 0 auto; }
.contact-form { display: flex; flex-direction: column; gap: 20px; margin-top: 40px; }
.contact-flash { color: var(--accent); font-weight: 700; }
.input {
    background: var(--card); border: 2px solid var(--border); border-radius: 15px;
    padding: 15px 20px; color: var(--text); font-family: 'Space Mono', monospace;
    font-size: 14px; transition: all 0.3s ease;
}
.input:focus { outline: none; border-color: var(--accent); box-shadow: 0 0 20px var(--accent-30); }
.input::placeholder { color: var(--text-alt); }
.textarea { min-height: 150px; resize: vertical; }
.submit-button {
    padding: 15px 35px; border: none; color: var(--bg);
    background: linear-gradient(135deg, var(--accent), var(--accent-alt));
    font-family: 'Orbitron', sans-serif; font-weight: 700; text-transform: uppercase;
    letter-spacing: 1px; border-radius: 50px; cursor: pointer; font-size: 14px; transition: all 0.3s ease;
}
.submit-button:hover { transform: translateY(-3px); box-shadow: 0 10px 30px var(--accent-60); }

.footer { background: var(--card); border-top: 2px solid var(--border); padding: 40px 0; text-align: center; }
.social-links { display: flex; justify-content: center; gap: 20px; margin-bottom: 20px; }
.social-link {
    width: 50px; height: 50px; border: 2px solid var(--border); border-radius: 50%;
    display: flex; align-items: center; justify-content: center; color: var(--accent);
    text-decoration: none; font-size: 20px; transition: all 0.3s ease;
}
.social-link:hover {
    border-color: var(--accent); background: var(--accent); color: var(--bg);
    transform: translateY(-5px) rotate(360deg); box-shadow: 0 10px 30px var(--accent-40);
}
.copyright { color: var(--text-alt); font-size: 14px; }

.app-header { padding: 40px 0; text-align: center; color: var(--text-alt); }
.app-logo { height: 80px; pointer-events: none; }
.app-link { color: var(--accent); }
"#;
