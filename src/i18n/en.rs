// =============================================================================
// Toorrii Web - English Strings
// =============================================================================
// English is the fallback table: every key used by a view must exist here.
// =============================================================================

pub(super) fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        // Brand
        "brand.name" => "Toorrii",
        "brand.tagline" => "Smart queue management for modern services.",

        // Navigation
        "nav.home" => "Home",
        "nav.about" => "About",
        "nav.partnerships" => "Partnerships",
        "nav.contact" => "Contact",
        "nav.language" => "Language",
        "nav.menu" => "Toggle menu",
        "nav.closeMenu" => "Close menu",

        // Footer
        "footer.explore" => "Explore",
        "footer.reachUs" => "Reach us",
        "footer.rights" => "All rights reserved.",

        // Hero
        "hero.title" => "Say goodbye to waiting lines",
        "hero.subtitle" => "Book your turn from your phone, follow the queue in real time and arrive exactly when it is your turn.",
        "hero.cta" => "Get started",
        "hero.stat1" => "Active users",
        "hero.stat2" => "Daily appointments",
        "hero.stat3" => "Average time saved",

        // Partnerships listing
        "partnerships.title" => "Our partners",
        "partnerships.subtitle" => "Organizations that trust Toorrii to serve their customers better.",
        "partnerships.viewDetails" => "View partnership",
        "partnerships.empty" => "New partnerships are on their way.",

        // About page
        "aboutPage.backToHome" => "Back to home",
        "aboutPage.title" => "About Toorrii",
        "aboutPage.intro" => "Toorrii is a queue management platform built in Algeria to give people back the time they lose waiting in line, and to help service providers welcome them in better conditions.",
        "aboutPage.missionTitle" => "Our mission",
        "aboutPage.missionText" => "Make every visit to a public or private service predictable, fair and stress-free by replacing physical queues with a simple digital turn.",
        "aboutPage.visionTitle" => "Our vision",
        "aboutPage.visionText" => "A country where no one has to spend a morning standing in line to see a doctor, renew a document or open a bank account.",
        "aboutPage.valuesTitle" => "Our values",
        "aboutPage.innovationTitle" => "Innovation",
        "aboutPage.innovationText" => "We build modern tools adapted to the realities of the field, and we keep improving them with the people who use them every day.",
        "aboutPage.accessibilityTitle" => "Accessibility",
        "aboutPage.accessibilityText" => "Toorrii works on every phone, in three languages, and keeps a place for visitors who prefer a printed ticket.",
        "aboutPage.reliabilityTitle" => "Reliability",
        "aboutPage.reliabilityText" => "Our partners count on us during their busiest hours. We design for availability first.",
        "aboutPage.localExpertiseTitle" => "Local expertise",
        "aboutPage.localExpertiseText" => "Our team knows the local institutions, regulations and habits, and supports partners on site.",
        "aboutPage.whoWeServeTitle" => "Who we serve",
        "aboutPage.whoWeServeText" => "Toorrii adapts to any organization that receives the public:",
        "aboutPage.service1" => "Hospitals, clinics and medical practices",
        "aboutPage.service2" => "Banks and insurance agencies",
        "aboutPage.service3" => "Public administrations and town halls",
        "aboutPage.service4" => "Telecom and utility customer centers",
        "aboutPage.service5" => "Universities and training centers",
        "aboutPage.service6" => "Retail stores and after-sales services",
        "aboutPage.whyChooseTitle" => "Why choose Toorrii",
        "aboutPage.provenTrackLabel" => "Proven track record:",
        "aboutPage.provenTrackText" => "thousands of appointments are handled through Toorrii every day.",
        "aboutPage.localSupportLabel" => "Local support:",
        "aboutPage.localSupportText" => "a team that speaks your language and answers quickly.",
        "aboutPage.complianceLabel" => "Compliance:",
        "aboutPage.complianceText" => "personal data is handled according to national regulations.",
        "aboutPage.scalabilityLabel" => "Scalability:",
        "aboutPage.scalabilityText" => "from a single office to a nationwide network of agencies.",
        "aboutPage.getInTouchTitle" => "Get in touch",
        "aboutPage.getInTouchText" => "Want to bring Toorrii to your organization? We would love to hear from you.",
        "aboutPage.email" => "Email: contact@toorrii.com",
        "aboutPage.phone" => "Phone: +213 (0) 123 456 789",
        "aboutPage.address" => "Address: Algiers, Algeria",

        // Contact page
        "contact.title" => "Contact us",
        "contact.subtitle" => "A question, a partnership idea or a demo request? Write to us and we will get back to you quickly.",
        "contact.email" => "Email",
        "contact.phone" => "Phone",
        "contact.location" => "Location",
        "contact.hours" => "Opening hours",
        "contact.hoursValue" => "Sunday - Thursday, 8:00 - 17:00",
        "contactPage.name" => "Full name",
        "contactPage.namePlaceholder" => "Your name",
        "contactPage.email" => "Email",
        "contactPage.emailPlaceholder" => "you@example.com",
        "contactPage.subject" => "Subject",
        "contactPage.subjectPlaceholder" => "What is it about?",
        "contactPage.message" => "Message",
        "contactPage.messagePlaceholder" => "Tell us more...",
        "contactPage.submit" => "Send Message",
        "contactPage.sending" => "Sending...",
        "contactPage.successMessage" => "Thank you! Your message has been sent.",
        "contactPage.errorMessage" => "Your message could not be sent. Please try again.",

        // Partner detail
        "partner.notFound" => "Partner not found",
        "partner.notFoundDesc" => "The partner you are looking for does not exist or is no longer listed.",
        "partner.backToPartnerships" => "Back to partnerships",
        "partner.founded" => "Founded",
        "partner.headquarters" => "Headquarters",
        "partner.partnershipSince" => "Partner since",
        "partner.visitWebsite" => "Visit website",
        "partner.aboutTitle" => "About",
        "partner.aboutQuote" => "Together with {name}, we are reshaping how the {industry} sector welcomes its customers.",
        "partner.collaboration" => "Collaboration",
        "partner.collaborationDesc" => "A joint team deploys and tunes Toorrii in every branch.",
        "partner.innovation" => "Innovation",
        "partner.innovationDesc" => "New features are piloted with our partner before reaching everyone.",
        "partner.results" => "Results",
        "partner.resultsDesc" => "Shorter waits, calmer lobbies and happier customers.",
        "partner.galleryTitle" => "Gallery",
        "partner.gallerySubtitle" => "A look at the partnership in the field.",
        "partner.featureHighlight" => "On site",
        "partner.readyToPartner" => "Ready to partner with us?",
        "partner.readyToPartnerDesc" => "Join the organizations that already give their customers their time back.",
        "partner.startConversation" => "Start a conversation",
        "partner.exploreMore" => "Discover the other organizations working with Toorrii.",
        "partner.viewAllPartners" => "View all partners",

        // 404
        "notFound.title" => "Page not found",
        "notFound.desc" => "The page you are looking for does not exist or has been moved.",
        "notFound.home" => "Go home",

        // Toasts
        "toast.dismiss" => "Dismiss",

        _ => return None,
    };
    Some(text)
}
