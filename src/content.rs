//! Copy and data for the public pages. Everything here is static; the only
//! state a section has is the category picked in its filter, which arrives as
//! a query parameter.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Client {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const STUDIO_NAME: &str = "Heres Studio";

pub const TAGLINE: &str = "Creamos historias audiovisuales cautivantes que inspiran. Le damos vida a \
                           tu marca a través de contenido innovador.";

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "Inicio", href: "/" },
    NavLink { name: "Servicios", href: "/#services" },
    NavLink { name: "Portfolio", href: "/#portfolio" },
    NavLink { name: "Admin", href: "/admin" },
    NavLink { name: "Contacto", href: "/contacto" },
];

pub static STATS: [Stat; 4] = [
    Stat {
        number: "10M+",
        label: "Reproducciones Totales",
        description: "En todas nuestras producciones",
    },
    Stat {
        number: "500K+",
        label: "Likes",
        description: "En redes sociales",
    },
    Stat {
        number: "50+",
        label: "Clientes Satisfechos",
        description: "Confían en nosotros",
    },
    Stat {
        number: "100%",
        label: "Tasa de Satisfacción",
        description: "En todos nuestros proyectos",
    },
];

pub static SERVICES: [Service; 4] = [
    Service {
        icon: "🎥",
        title: "Producción de Video",
        description: "Contenido de video de alta calidad para publicidades, redes sociales y \
                      comunicaciones corporativas.",
    },
    Service {
        icon: "📸",
        title: "Fotografía",
        description: "Servicios profesionales de fotografía para productos, eventos y narrativa de \
                      marca.",
    },
    Service {
        icon: "🎬",
        title: "Post-Producción",
        description: "Edición experta, corrección de color y efectos visuales para perfeccionar tu \
                      contenido audiovisual.",
    },
    Service {
        icon: "📊",
        title: "Estrategia de Contenido",
        description: "Estrategias de contenido personalizadas para maximizar el impacto de tus \
                      campañas de marketing audiovisual.",
    },
];

/// Cards of the draggable carousel; services plus animation
pub static FEATURES: [Service; 5] = [
    Service {
        icon: "🎥",
        title: "Producción de Video",
        description: "Creamos contenido audiovisual de alta calidad para publicidades, redes \
                      sociales y comunicaciones corporativas.",
    },
    Service {
        icon: "📸",
        title: "Fotografía",
        description: "Servicios profesionales de fotografía para productos, eventos y narrativa de \
                      marca.",
    },
    Service {
        icon: "🎬",
        title: "Post-Producción",
        description: "Edición experta, corrección de color y efectos visuales para perfeccionar tu \
                      contenido audiovisual.",
    },
    Service {
        icon: "📊",
        title: "Estrategia de Contenido",
        description: "Estrategias de contenido personalizadas para maximizar el impacto de tus \
                      campañas de marketing audiovisual.",
    },
    Service {
        icon: "🎭",
        title: "Animación",
        description: "Creación de animaciones atractivas y motion graphics para dar vida a tus \
                      ideas.",
    },
];

/// Words scrolling across the marquee band
pub static MARQUEE: [&str; 6] = [
    "Producción de Video",
    "Fotografía",
    "Post-Producción",
    "Estrategia de Contenido",
    "Animación",
    "Redes Sociales",
];

pub const ALL_CLIENTS: &str = "Todos";

pub static CLIENT_CATEGORIES: [&str; 6] = [
    ALL_CLIENTS,
    "Empresas",
    "Influencers",
    "Artistas",
    "Startups",
    "Indumentaria",
];

pub static CLIENTS: [Client; 8] = [
    Client {
        name: "Cliente 1",
        category: "Empresas",
        description: "Proyecto de contenido audiovisual corporativo",
    },
    Client {
        name: "Influencer Lifestyle",
        category: "Influencers",
        description: "Contenido semanal para Instagram y TikTok",
    },
    Client {
        name: "Marca de Ropa",
        category: "Indumentaria",
        description: "Campaña de temporada primavera-verano",
    },
    Client {
        name: "Startup Tech",
        category: "Startups",
        description: "Videos promocionales para lanzamiento de app",
    },
    Client {
        name: "Artista Musical",
        category: "Artistas",
        description: "Producción de videoclip y contenido para RRSS",
    },
    Client {
        name: "Marca Deportiva",
        category: "Indumentaria",
        description: "Campaña con atletas y embajadores de marca",
    },
    Client {
        name: "Empresa Industrial",
        category: "Empresas",
        description: "Video institucional y fotografía de productos",
    },
    Client {
        name: "App Fintech",
        category: "Startups",
        description: "Contenido educativo sobre finanzas personales",
    },
];

pub const ALL_PROJECTS: &str = "All";

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "Campaña de Storytelling de Marca",
        description: "Serie de videos emotivos mostrando historias de éxito de clientes",
        category: "Producción de Video",
    },
    Project {
        id: 2,
        title: "Lanzamiento de Producto",
        description: "Cobertura de evento en vivo y video resumen para una startup tecnológica",
        category: "Cobertura de Eventos",
    },
    Project {
        id: 3,
        title: "Paquete de Contenido para Redes Sociales",
        description: "Conjunto de videos cortos e imágenes para Instagram y TikTok",
        category: "Redes Sociales",
    },
    Project {
        id: 4,
        title: "Serie de Capacitación Corporativa",
        description: "Videos educativos atractivos para la incorporación de empleados",
        category: "Corporativo",
    },
    Project {
        id: 5,
        title: "Publicidad para TV",
        description: "Spot de 30 segundos para una campaña publicitaria nacional",
        category: "Publicidad",
    },
    Project {
        id: 6,
        title: "Cinematografía con Drones",
        description: "Tomas aéreas para un desarrollador inmobiliario de lujo",
        category: "Especialidad",
    },
];

pub static TIMELINE: [Milestone; 6] = [
    Milestone {
        year: 2018,
        title: "Fundación de Heres Studio",
        description: "Nuestro viaje comenzó con una pasión por el diseño minimalista y el arte \
                      audiovisual.",
        details: "Fundado por Lautaro Heres, Heres Studio comenzó como un pequeño estudio en \
                  Buenos Aires, combinando su amor por el diseño minimalista y la belleza \
                  audiovisual.",
    },
    Milestone {
        year: 2019,
        title: "Primera Exposición Importante",
        description: "Mostramos nuestra mezcla única de arte digital y producción audiovisual en \
                      el Festival de Diseño de Buenos Aires.",
        details: "Nuestra exposición 'Bloom Digital' atrajo a más de 10,000 visitantes y recibió \
                  elogios de la crítica por su enfoque innovador en la fusión de tecnología con \
                  elementos naturales.",
    },
    Milestone {
        year: 2020,
        title: "Lanzamiento de Servicios Online",
        description: "Expandimos nuestro alcance llevando nuestras creaciones al mundo digital.",
        details: "En respuesta a los cambios globales, pivoteamos hacia servicios en línea, \
                  ofreciendo nuestros diseños únicos y talleres virtuales de producción \
                  audiovisual a una audiencia mundial.",
    },
    Milestone {
        year: 2021,
        title: "Colaboración con Marcas Top",
        description: "Nos asociamos con marcas líderes de estilo de vida para crear colecciones \
                      exclusivas.",
        details: "Nuestras colaboraciones incluyeron una serie de videos limitados con la marca \
                  de moda argentina Jazmín Chebar y una línea de contenido audiovisual \
                  personalizado para Mercado Libre.",
    },
    Milestone {
        year: 2022,
        title: "Reconocimiento Internacional",
        description: "Recibimos el prestigioso Premio Internacional de Diseño Audiovisual.",
        details: "Nuestra instalación 'Ecos Etéreos', que combinaba proyecciones holográficas \
                  con elementos naturales, ganó la medalla de oro en el Festival Internacional \
                  de Cine de Mar del Plata.",
    },
    Milestone {
        year: 2023,
        title: "Expansión de Estudios",
        description: "Abrimos nuestro primer estudio insignia en el corazón de Buenos Aires.",
        details: "Nuestra ubicación en Palermo ofrece una experiencia inmersiva, combinando \
                  instalaciones digitales con un espacio de producción audiovisual de \
                  vanguardia.",
    },
];

pub static TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Lautaro Heres",
        role: "Fundador y Director Creativo",
        bio: "Lautaro es el visionario detrás de Heres Studio, aportando años de experiencia en \
              producción audiovisual y una pasión por contar historias a través de medios \
              visuales.",
    },
    TeamMember {
        name: "Leon",
        role: "Jefe de Producción",
        bio: "Leon es la mano derecha de Lautaro, supervisando todos los procesos de producción \
              y asegurando la más alta calidad en cada proyecto que Heres Studio emprende.",
    },
];

/// Resolve a requested category against the known ones. Unknown or missing
/// values fall back to `all`.
fn pick_category<'a>(
    requested: Option<&str>,
    known: &[&'a str],
    all: &'a str,
) -> &'a str {
    requested
        .and_then(|r| known.iter().copied().find(|k| *k == r))
        .unwrap_or(all)
}

/// Clients grid: the active category and the clients in it
pub fn clients_in(requested: Option<&str>) -> (&'static str, Vec<&'static Client>) {
    let active = pick_category(requested, &CLIENT_CATEGORIES, ALL_CLIENTS);
    let clients = CLIENTS
        .iter()
        .filter(|c| active == ALL_CLIENTS || c.category == active)
        .collect();
    (active, clients)
}

/// `All` followed by each project category, in order of first appearance
pub fn project_categories() -> Vec<&'static str> {
    let mut categories = vec![ALL_PROJECTS];
    for p in PROJECTS.iter() {
        if !categories.contains(&p.category) {
            categories.push(p.category);
        }
    }
    categories
}

/// Portfolio grid: the active category and the projects in it
pub fn projects_in(requested: Option<&str>) -> (&'static str, Vec<&'static Project>) {
    let categories = project_categories();
    let active = pick_category(requested, &categories, ALL_PROJECTS);
    let projects = PROJECTS
        .iter()
        .filter(|p| active == ALL_PROJECTS || p.category == active)
        .collect();
    (active, projects)
}
