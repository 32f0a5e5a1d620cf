//! 信息弹窗的静态内容

use caccompta_shared::PRODUCT_NAME;
use leptos::prelude::*;

/// (标题, 正文)
const CONDITIONS: [(&str, &str); 6] = [
    (
        "1. Objet",
        "CACCompta V3.25 est un logiciel de gestion comptable conforme aux normes OHADA, destiné aux cabinets d'expertise comptable et aux entreprises de la zone UEMOA.",
    ),
    (
        "2. Licence d'utilisation",
        "Le logiciel est fourni sous licence commerciale. L'utilisateur s'engage à respecter les droits de propriété intellectuelle et à ne pas redistribuer le logiciel sans autorisation.",
    ),
    (
        "3. Conformité OHADA",
        "Le logiciel respecte les dispositions du droit comptable OHADA et les normes IAS/IFRS applicables dans la zone UEMOA. Les utilisateurs sont responsables de la mise à jour de leurs pratiques selon les évolutions réglementaires.",
    ),
    (
        "4. Protection des données",
        "Les données clients sont stockées de manière sécurisée. L'utilisateur reste propriétaire de ses données et peut les exporter à tout moment. Le cabinet s'engage à respecter la confidentialité des informations traitées.",
    ),
    (
        "5. Responsabilités",
        "L'utilisateur est responsable de la sauvegarde régulière de ses données et de la vérification de la cohérence des informations saisies. Le cabinet décline toute responsabilité en cas de perte de données due à une mauvaise utilisation.",
    ),
    (
        "6. Support et maintenance",
        "Un support technique est disponible pendant les heures ouvrables. Les mises à jour de sécurité et de conformité sont incluses dans la licence.",
    ),
];

const SUPPORT_CONTACTS: [(&str, &str); 5] = [
    ("Cabinet", "Cabinet de gestion et de système d'information CAGESI"),
    ("Téléphone 1", "+223 90 14 78 57"),
    ("Téléphone 2", "+223 75 44 74 41"),
    ("Email", "info@cagesicabinet.com"),
    ("Horaires", "Lundi - Vendredi, 8h00 - 18h00"),
];

const PRIORITY_SUPPORT: [(&str, &str); 3] = [
    ("WhatsApp", "+223 90 14 78 57"),
    ("Télé-assistance", "Connexion à distance disponible"),
    ("Formation", "Sessions personnalisées sur demande"),
];

const RESOURCES: [(&str, &str); 4] = [
    ("Manuel utilisateur", "Guide complet PDF disponible"),
    ("Vidéos tutoriels", "Formations en ligne"),
    ("FAQ", "Questions fréquemment posées"),
    ("Mises à jour", "Notes de version et nouveautés"),
];

/// (服务, 说明, 指标)
const SERVICES: [(&str, &str, &str); 4] = [
    ("Serveurs Principaux", "Tous les services fonctionnent normalement", "99.9%"),
    ("Base de Données", "Performances optimales", "100%"),
    ("Sauvegardes", "Dernière sauvegarde : il y a 15 minutes", "✓"),
    ("Sécurité", "Chiffrement SSL actif, pare-feu opérationnel", "🔒"),
];

const STATISTICS: [(&str, &str); 4] = [
    ("Temps de réponse moyen", "45ms"),
    ("Utilisateurs connectés", "127"),
    ("Dernière maintenance", "23/01/2024"),
    ("Prochaine maintenance", "15/02/2024"),
];

const RECENT_UPDATES: [(&str, &str); 3] = [
    ("Version 3.25.1 - Corrections mineures", "20/01/2024"),
    ("Version 3.25.0 - Nouvelles fonctionnalités", "15/01/2024"),
    ("Patch sécurité 3.24.3", "10/01/2024"),
];

fn labelled_lines(entries: &'static [(&'static str, &'static str)]) -> impl IntoView {
    entries
        .iter()
        .map(|(label, value)| {
            view! {
                <p><strong>{*label} " :"</strong> " " {*value}</p>
            }
        })
        .collect_view()
}

#[component]
pub fn ConditionsContent() -> impl IntoView {
    view! {
        <div class="prose max-w-none">
            <h4 class="text-lg font-semibold text-gray-900 mb-4">
                {PRODUCT_NAME} " - Conditions Générales d'Utilisation"
            </h4>
            {CONDITIONS
                .iter()
                .map(|(heading, body)| view! {
                    <h5 class="font-medium text-gray-900 mb-2">{*heading}</h5>
                    <p class="text-sm text-gray-700 mb-4">{*body}</p>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SupportContent() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="bg-blue-50 border border-blue-200 rounded-lg p-4">
                <h4 class="font-semibold text-blue-900 mb-2">"📞 Support Technique CAGESI"</h4>
                <div class="space-y-2 text-sm">{labelled_lines(&SUPPORT_CONTACTS)}</div>
            </div>
            <div class="bg-green-50 border border-green-200 rounded-lg p-4">
                <h4 class="font-semibold text-green-900 mb-2">"🚀 Support Prioritaire"</h4>
                <div class="space-y-2 text-sm">{labelled_lines(&PRIORITY_SUPPORT)}</div>
            </div>
            <div class="bg-orange-50 border border-orange-200 rounded-lg p-4">
                <h4 class="font-semibold text-orange-900 mb-2">"📚 Ressources"</h4>
                <div class="space-y-2 text-sm">{labelled_lines(&RESOURCES)}</div>
            </div>
            <div class="bg-gray-50 border border-gray-200 rounded-lg p-4">
                <h4 class="font-semibold text-gray-900 mb-2">"⚡ Support d'urgence"</h4>
                <p class="text-sm text-gray-700">
                    "En cas de problème critique (perte de données, blocage système), contactez immédiatement notre équipe d'urgence au "
                    <strong>"+223 90 14 78 57"</strong>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn SystemStatusContent() -> impl IntoView {
    view! {
        <div class="space-y-6">
            {SERVICES
                .iter()
                .map(|(name, detail, metric)| view! {
                    <div class="flex items-center justify-between p-4 bg-green-50 border border-green-200 rounded-lg">
                        <div class="flex items-center space-x-3">
                            <div class="w-3 h-3 bg-green-500 rounded-full"></div>
                            <div>
                                <h4 class="font-semibold text-green-900">{*name}</h4>
                                <p class="text-sm text-green-700">{*detail}</p>
                            </div>
                        </div>
                        <span class="text-green-600 font-medium">{*metric}</span>
                    </div>
                })
                .collect_view()}

            <div class="bg-blue-50 border border-blue-200 rounded-lg p-4">
                <h4 class="font-semibold text-blue-900 mb-3">"📊 Statistiques Système"</h4>
                <div class="grid grid-cols-2 gap-4 text-sm">
                    {STATISTICS
                        .iter()
                        .map(|(label, value)| view! {
                            <div>
                                <span class="text-gray-600">{*label} " :"</span>
                                <span class="ml-2 font-medium text-blue-600">{*value}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="bg-gray-50 border border-gray-200 rounded-lg p-4">
                <h4 class="font-semibold text-gray-900 mb-2">"🔄 Mises à jour récentes"</h4>
                <div class="space-y-2 text-sm">
                    {RECENT_UPDATES
                        .iter()
                        .map(|(release, date)| view! {
                            <div class="flex justify-between">
                                <span>{*release}</span>
                                <span class="text-gray-500">{*date}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
