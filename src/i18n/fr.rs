// =============================================================================
// Toorrii Web - French Strings
// =============================================================================

pub(super) fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        "brand.tagline" => "La gestion intelligente des files d'attente.",

        "nav.home" => "Accueil",
        "nav.about" => "À propos",
        "nav.partnerships" => "Partenariats",
        "nav.contact" => "Contact",
        "nav.language" => "Langue",
        "nav.menu" => "Ouvrir le menu",
        "nav.closeMenu" => "Fermer le menu",

        "footer.explore" => "Explorer",
        "footer.reachUs" => "Nous joindre",
        "footer.rights" => "Tous droits réservés.",

        "hero.title" => "Dites adieu aux files d'attente",
        "hero.subtitle" => "Réservez votre tour depuis votre téléphone, suivez la file en temps réel et arrivez au bon moment.",
        "hero.cta" => "Commencer",
        "hero.stat1" => "Utilisateurs actifs",
        "hero.stat2" => "Rendez-vous par jour",
        "hero.stat3" => "Temps gagné en moyenne",

        "partnerships.title" => "Nos partenaires",
        "partnerships.subtitle" => "Des organisations qui font confiance à Toorrii pour mieux servir leurs clients.",
        "partnerships.viewDetails" => "Voir le partenariat",
        "partnerships.empty" => "De nouveaux partenariats arrivent bientôt.",

        "aboutPage.backToHome" => "Retour à l'accueil",
        "aboutPage.title" => "À propos de Toorrii",
        "aboutPage.intro" => "Toorrii est une plateforme de gestion des files d'attente conçue en Algérie pour rendre aux gens le temps perdu à attendre, et aider les services à mieux les accueillir.",
        "aboutPage.missionTitle" => "Notre mission",
        "aboutPage.missionText" => "Rendre chaque visite prévisible, équitable et sereine en remplaçant la file physique par un tour numérique simple.",
        "aboutPage.visionTitle" => "Notre vision",
        "aboutPage.visionText" => "Un pays où personne ne passe une matinée debout pour voir un médecin, renouveler un document ou ouvrir un compte.",
        "aboutPage.valuesTitle" => "Nos valeurs",
        "aboutPage.innovationTitle" => "Innovation",
        "aboutPage.innovationText" => "Nous construisons des outils modernes adaptés au terrain et les améliorons avec ceux qui les utilisent chaque jour.",
        "aboutPage.accessibilityTitle" => "Accessibilité",
        "aboutPage.accessibilityText" => "Toorrii fonctionne sur tous les téléphones, en trois langues, et garde une place pour le ticket papier.",
        "aboutPage.reliabilityTitle" => "Fiabilité",
        "aboutPage.reliabilityText" => "Nos partenaires comptent sur nous aux heures de pointe. La disponibilité passe en premier.",
        "aboutPage.localExpertiseTitle" => "Expertise locale",
        "aboutPage.localExpertiseText" => "Notre équipe connaît les institutions, les règles et les habitudes locales, et accompagne les partenaires sur site.",
        "aboutPage.whoWeServeTitle" => "Qui nous servons",
        "aboutPage.whoWeServeText" => "Toorrii s'adapte à toute organisation qui reçoit du public :",
        "aboutPage.service1" => "Hôpitaux, cliniques et cabinets médicaux",
        "aboutPage.service2" => "Banques et agences d'assurance",
        "aboutPage.service3" => "Administrations publiques et mairies",
        "aboutPage.service4" => "Centres clients télécom et énergie",
        "aboutPage.service5" => "Universités et centres de formation",
        "aboutPage.service6" => "Commerces et services après-vente",
        "aboutPage.whyChooseTitle" => "Pourquoi choisir Toorrii",
        "aboutPage.provenTrackLabel" => "Résultats prouvés :",
        "aboutPage.provenTrackText" => "des milliers de rendez-vous passent par Toorrii chaque jour.",
        "aboutPage.localSupportLabel" => "Support local :",
        "aboutPage.localSupportText" => "une équipe qui parle votre langue et répond vite.",
        "aboutPage.complianceLabel" => "Conformité :",
        "aboutPage.complianceText" => "les données personnelles sont traitées selon la réglementation nationale.",
        "aboutPage.scalabilityLabel" => "Évolutivité :",
        "aboutPage.scalabilityText" => "d'un seul bureau à un réseau national d'agences.",
        "aboutPage.getInTouchTitle" => "Contactez-nous",
        "aboutPage.getInTouchText" => "Vous souhaitez adopter Toorrii ? Nous serions ravis d'échanger avec vous.",
        "aboutPage.email" => "E-mail : contact@toorrii.com",
        "aboutPage.phone" => "Téléphone : +213 (0) 123 456 789",
        "aboutPage.address" => "Adresse : Alger, Algérie",

        "contact.title" => "Contactez-nous",
        "contact.subtitle" => "Une question, une idée de partenariat ou une demande de démo ? Écrivez-nous, nous répondons rapidement.",
        "contact.email" => "E-mail",
        "contact.phone" => "Téléphone",
        "contact.location" => "Adresse",
        "contact.hours" => "Horaires",
        "contact.hoursValue" => "Dimanche - Jeudi, 8h00 - 17h00",
        "contactPage.name" => "Nom complet",
        "contactPage.namePlaceholder" => "Votre nom",
        "contactPage.email" => "E-mail",
        "contactPage.emailPlaceholder" => "vous@exemple.com",
        "contactPage.subject" => "Sujet",
        "contactPage.subjectPlaceholder" => "De quoi s'agit-il ?",
        "contactPage.message" => "Message",
        "contactPage.messagePlaceholder" => "Dites-nous en plus...",
        "contactPage.submit" => "Envoyer le message",
        "contactPage.sending" => "Envoi...",
        "contactPage.successMessage" => "Merci ! Votre message a bien été envoyé.",
        "contactPage.errorMessage" => "Votre message n'a pas pu être envoyé. Veuillez réessayer.",

        "partner.notFound" => "Partenaire introuvable",
        "partner.notFoundDesc" => "Le partenaire que vous cherchez n'existe pas ou n'est plus référencé.",
        "partner.backToPartnerships" => "Retour aux partenariats",
        "partner.founded" => "Fondé en",
        "partner.headquarters" => "Siège",
        "partner.partnershipSince" => "Partenaire depuis",
        "partner.visitWebsite" => "Visiter le site",
        "partner.aboutTitle" => "À propos de",
        "partner.aboutQuote" => "Avec {name}, nous transformons l'accueil des clients dans le secteur {industry}.",
        "partner.collaboration" => "Collaboration",
        "partner.collaborationDesc" => "Une équipe commune déploie et ajuste Toorrii dans chaque agence.",
        "partner.innovation" => "Innovation",
        "partner.innovationDesc" => "Les nouveautés sont testées avec notre partenaire avant d'être généralisées.",
        "partner.results" => "Résultats",
        "partner.resultsDesc" => "Moins d'attente, des halls plus calmes et des clients plus satisfaits.",
        "partner.galleryTitle" => "Galerie",
        "partner.gallerySubtitle" => "Le partenariat sur le terrain.",
        "partner.featureHighlight" => "Sur site",
        "partner.readyToPartner" => "Prêt à devenir partenaire ?",
        "partner.readyToPartnerDesc" => "Rejoignez les organisations qui rendent déjà leur temps à leurs clients.",
        "partner.startConversation" => "Lancer la discussion",
        "partner.exploreMore" => "Découvrez les autres organisations qui travaillent avec Toorrii.",
        "partner.viewAllPartners" => "Voir tous les partenaires",

        "notFound.title" => "Page introuvable",
        "notFound.desc" => "La page que vous cherchez n'existe pas ou a été déplacée.",
        "notFound.home" => "Retour à l'accueil",

        "toast.dismiss" => "Fermer",

        _ => return None,
    };
    Some(text)
}
