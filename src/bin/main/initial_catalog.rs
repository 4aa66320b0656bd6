use anyhow::{Result, anyhow};
use folio_core::catalog::{CaseStudy, Feature, Metric, ProjectCatalog, ProjectRecord, Tag};
use log::{debug, info};

const PROCESS_TAGS: [Tag; 3] = [
    Tag {
        id: "research",
        label: "Research",
    },
    Tag { id: "ux", label: "UX" },
    Tag {
        id: "prototyping",
        label: "Prototyping",
    },
];

const FINANCE_TAGS: [Tag; 3] = [
    Tag {
        id: "mobile",
        label: "Mobile",
    },
    Tag { id: "ui", label: "UI" },
    Tag {
        id: "gamification",
        label: "Gamification",
    },
];

const LEARNING_TAGS: [Tag; 3] = [
    Tag {
        id: "elearning",
        label: "E-learning",
    },
    Tag {
        id: "dashboard",
        label: "Dashboard",
    },
    Tag {
        id: "admin",
        label: "Admin Panel",
    },
];

const PROCESS_FEATURES: [Feature; 2] = [
    Feature {
        title: "Dashboard unificado",
        description: "Solicitudes pendientes en una sola vista con prioridad",
        icon: None,
    },
    Feature {
        title: "Firma digital",
        description: "Aprobaciones con validez legal sin papel",
        icon: None,
    },
];

const PROCESS_METRICS: [Metric; 2] = [
    Metric {
        label: "Reducción de tiempo",
        value: "60%",
        description: Some("De 8 días a 3.2 días promedio"),
    },
    Metric {
        label: "Adopción",
        value: "95%",
        description: None,
    },
];

const PROCESS_CASE: CaseStudy = CaseStudy {
    title: "Digitalización de Procesos Internos",
    subtitle: "Transformación digital de flujos administrativos",
    context: "Aprobaciones manuales y desconectadas en una empresa mediana.",
    challenge: "Reducir a la mitad los tiempos de aprobación sin perder trazabilidad.",
    methodology: "Design Thinking + Lean UX",
    research: "Entrevistas con 15 usuarios internos y análisis de métricas de tiempo.",
    solution_description: "Plataforma web centralizada con seguimiento en tiempo real.",
    features: &PROCESS_FEATURES,
    key_impact: "Reducción del 60% en tiempos de aprobación",
    metrics: &PROCESS_METRICS,
    learnings: "La iteración temprana con usuarios reales fue clave.",
    next_steps: "Integración con sistemas ERP existentes.",
};

const PROJECTS: [ProjectRecord; 3] = [
    ProjectRecord {
        icon: "file-text",
        link: "/project/proyecto-1",
        ..ProjectRecord::new("proyecto-1", "Digitalización de Procesos Internos", 1)
            .with_description("Rediseño de flujos administrativos para reducir tiempos de aprobación")
            .with_tags(&PROCESS_TAGS)
            .with_case_study(PROCESS_CASE)
    },
    ProjectRecord {
        icon: "currency-dollar",
        link: "/project/proyecto-2",
        ..ProjectRecord::new("proyecto-2", "App de Gestión Financiera Personal", 2)
            .with_description("Aplicación móvil para mejorar hábitos de ahorro")
            .with_tags(&FINANCE_TAGS)
    },
    ProjectRecord {
        icon: "graduation-cap",
        link: "/project/proyecto-3",
        ..ProjectRecord::new("proyecto-3", "Plataforma de E-learning Corporativo", 3)
            .with_description("Capacitación interna con seguimiento de progreso y certificaciones")
            .with_tags(&LEARNING_TAGS)
    },
];

pub(super) fn load_initial_catalog() -> Result<ProjectCatalog> {
    let catalog =
        ProjectCatalog::from_records(&PROJECTS).map_err(|err| anyhow!("initial catalog: {err}"))?;

    for tag in catalog.tag_summary() {
        debug!("catalog: tag={} count={}", tag.id, tag.count);
    }
    info!(
        "catalog: {} projects ({} active)",
        catalog.all().len(),
        catalog.active_sorted().len()
    );
    Ok(catalog)
}
