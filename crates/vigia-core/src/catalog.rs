//! Fixed scenario and security-measure vocabularies
//!
//! The backend code strings are the wire contract with the external scoring
//! engine and must be preserved byte-for-byte. Every human-readable label
//! maps 1:1 to a code through these tables; a label with no entry must fail
//! loudly, never be sent as free text.

use crate::error::{CoreError, Result};

/// Threat scenarios, in the fixed order presented to users.
/// Pairs of (label, backend code).
pub const SCENARIOS: &[(&str, &str)] = &[
    ("Intrusión armada con objetivo de robo", "intrusion_armada"),
    ("Bloqueo de movimientos sociales", "bloqueo_social"),
    ("Vandalismo", "vandalismo"),
    ("Robo interno", "robo_interno"),
    (
        "Robo de mercancía en tránsito (modalidad express)",
        "robo_transito",
    ),
    ("Secuestro de vehículos de reparto", "secuestro_vehiculos"),
    ("Asalto durante horarios de carga/descarga", "asalto_operativo"),
    ("Sabotaje a instalaciones críticas", "sabotaje_instalaciones"),
    ("Robo con violencia a empleados", "robo_violencia"),
    ("Intrusión nocturna sin confrontación", "intrusion_nocturna"),
    (
        "Robo hormiga (pérdidas menores sistemáticas)",
        "robo_hormiga",
    ),
    ("Extorsión a transportistas", "extorsion_transporte"),
    (
        "Daños por manifestaciones o disturbios",
        "danos_manifestaciones",
    ),
    ("Robo de información confidencial/datos", "robo_datos"),
    ("Asalto en estacionamientos", "asalto_estacionamiento"),
    ("Robo de combustible de vehículos", "robo_combustible"),
    (
        "Intrusión para ocupación ilegal del terreno",
        "ocupacion_ilegal",
    ),
    (
        "Robo de equipos tecnológicos/computadoras",
        "robo_tecnologia",
    ),
    ("Asalto a personal administrativo", "asalto_administrativo"),
];

/// Security measures, in the fixed order presented to users.
/// Pairs of (label, backend code).
pub const SECURITY_MEASURES: &[(&str, &str)] = &[
    ("Cámaras de seguridad", "camaras"),
    ("Guardias de seguridad", "guardias"),
    ("Sistemas de intrusión", "sistemas_intrusion"),
    ("Control de acceso", "control_acceso"),
    ("Iluminación perimetral", "iluminacion"),
    ("Portones con pistones automáticos", "portones_automaticos"),
    ("Plumas de acceso vehicular", "plumas_acceso"),
    ("Bolardos retráctiles/fijos", "bolardos"),
    ("Poncha llantas en accesos", "poncha_llantas"),
    ("Casetas de seguridad", "casetas_seguridad"),
    ("Cámaras en puntos de acceso", "camaras_acceso"),
    ("Torniquetes de cuerpo completo", "torniquetes"),
    ("Sistema RFID para acceso (badges)", "rfid_acceso"),
    ("Radios de comunicación para guardias", "radios_comunicacion"),
    ("Centro de monitoreo 24/7", "centro_monitoreo"),
    ("Botones de pánico distribuidos", "botones_panico"),
    ("Bardas perimetrales reforzadas", "bardas_perimetrales"),
    ("Sensores de movimiento perimetrales", "sensores_movimiento"),
    ("Detectores de metales en accesos", "detectores_metales"),
    ("Sistema de videoanalítica con IA", "videoanalytica_ia"),
    ("Patrullajes aleatorios programados", "patrullajes_aleatorios"),
    ("Iluminación LED con sensores", "iluminacion_inteligente"),
    ("Sistemas de comunicación redundantes", "comunicacion_redundante"),
    (
        "Protocolos de verificación biométrica",
        "verificacion_biometrica",
    ),
    ("Cercas electrificadas", "cercas_electrificadas"),
    ("Sistemas anti-drones", "anti_drones"),
    ("Monitoreo sísmico perimetral", "monitoreo_sismico"),
    ("Control de acceso por zonas", "acceso_por_zonas"),
    ("Sistema de evacuación automatizado", "evacuacion_automatizada"),
    ("Protocolos de lockdown", "protocolos_lockdown"),
    ("Coordinación con autoridades locales", "coordinacion_autoridades"),
    ("Sistema de alerta temprana comunitario", "alerta_temprana"),
];

/// Look up the backend code for a scenario label
pub fn scenario_code(label: &str) -> Result<&'static str> {
    SCENARIOS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, code)| *code)
        .ok_or_else(|| CoreError::UnmappedLabel(label.to_string()))
}

/// Look up the backend code for a security-measure label
pub fn measure_code(label: &str) -> Result<&'static str> {
    SECURITY_MEASURES
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, code)| *code)
        .ok_or_else(|| CoreError::UnmappedLabel(label.to_string()))
}

/// Scenario labels in presentation order
pub fn scenario_labels() -> impl Iterator<Item = &'static str> {
    SCENARIOS.iter().map(|(label, _)| *label)
}

/// Security-measure labels in presentation order
pub fn measure_labels() -> impl Iterator<Item = &'static str> {
    SECURITY_MEASURES.iter().map(|(label, _)| *label)
}

/// Vulnerability band for a count of active security measures
pub fn vulnerability_level(measure_count: usize) -> &'static str {
    if measure_count >= 20 {
        "BAJA"
    } else if measure_count >= 10 {
        "MEDIA"
    } else if measure_count >= 5 {
        "ALTA"
    } else {
        "CRÍTICA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_scenario_lookup() {
        let code = scenario_code("Intrusión armada con objetivo de robo").unwrap();
        assert_eq!(code, "intrusion_armada");
    }

    #[test]
    fn test_measure_lookup() {
        let code = measure_code("Cámaras de seguridad").unwrap();
        assert_eq!(code, "camaras");
    }

    #[test]
    fn test_unmapped_label_fails() {
        let result = scenario_code("Ataque de tiburones");
        assert!(matches!(result, Err(CoreError::UnmappedLabel(_))));
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(SCENARIOS.len(), 19);
        assert_eq!(SECURITY_MEASURES.len(), 32);
    }

    #[test]
    fn test_every_label_maps_to_a_known_code() {
        // No silent pass-through: every entry in both tables must resolve.
        for (label, code) in SCENARIOS {
            assert_eq!(scenario_code(label).unwrap(), *code);
        }
        for (label, code) in SECURITY_MEASURES {
            assert_eq!(measure_code(label).unwrap(), *code);
        }
    }

    #[test]
    fn test_codes_are_unique() {
        let scenario_codes: HashSet<_> = SCENARIOS.iter().map(|(_, c)| *c).collect();
        assert_eq!(scenario_codes.len(), SCENARIOS.len());

        let measure_codes: HashSet<_> = SECURITY_MEASURES.iter().map(|(_, c)| *c).collect();
        assert_eq!(measure_codes.len(), SECURITY_MEASURES.len());
    }

    #[test]
    fn test_codes_are_wire_safe() {
        // Codes travel as-is to the scoring engine: lowercase ascii + underscores.
        for (_, code) in SCENARIOS.iter().chain(SECURITY_MEASURES.iter()) {
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "unexpected character in code {code}"
            );
        }
    }

    #[test]
    fn test_vulnerability_bands() {
        assert_eq!(vulnerability_level(32), "BAJA");
        assert_eq!(vulnerability_level(20), "BAJA");
        assert_eq!(vulnerability_level(19), "MEDIA");
        assert_eq!(vulnerability_level(10), "MEDIA");
        assert_eq!(vulnerability_level(9), "ALTA");
        assert_eq!(vulnerability_level(5), "ALTA");
        assert_eq!(vulnerability_level(4), "CRÍTICA");
        assert_eq!(vulnerability_level(0), "CRÍTICA");
    }
}
