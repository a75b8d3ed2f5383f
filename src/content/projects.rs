//! Case studies. The featured case is kept apart from the grid.

use super::{Block, Project};

pub static FEATURED_CASE: Project = Project {
    slug: "ai-powered-logistics-optimization",
    title: "AI-Powered Logistics Optimization",
    client: Some("TransCorp International"),
    category: "Machine Learning",
    result: "40% reduction in delivery costs",
    description: "Implemented machine learning algorithms to optimize route planning and demand forecasting for a major logistics provider.",
    tags: &["Machine Learning", "Python", "AWS"],
    body: &[
        Block::Paragraph(
            "Logistics is a game of margins. For TransCorp International, rising fuel costs and inefficient routing were eating into profitability. \
             Our mission was to overhaul their logistics planning with a data-driven, AI-first approach.",
        ),
        Block::Heading("The Challenge"),
        Block::Paragraph(
            "Legacy routing software was static, failing to account for real-time traffic, weather conditions, or dynamic delivery windows. \
             This resulted in longer delivery times, excessive fuel consumption, and missed SLAs.",
        ),
        Block::Heading("The Solution"),
        Block::Paragraph(
            "We engineered a custom Reinforcement Learning model that processes historical delivery data alongside real-time inputs. \
             The system dynamically re-routes drivers in transit, optimizing for fuel efficiency and time-to-delivery.",
        ),
        Block::Heading("Key Technologies"),
        Block::Highlights(&[
            ("Predictive Modeling:", "LSTM networks for demand forecasting."),
            (
                "Route Optimization:",
                "Genetic algorithms for solving the dynamic Vehicle Routing Problem (VRP).",
            ),
            (
                "Infrastructure:",
                "Scalable AWS serverless architecture for real-time processing.",
            ),
        ]),
        Block::Heading("Outcomes"),
        Block::Paragraph(
            "The results were transformative: a 40% reduction in overall delivery costs and a 25% improvement in on-time delivery rates \
             within the first quarter of deployment.",
        ),
    ],
};

pub static PROJECTS: &[Project] = &[
    Project {
        slug: "predictive-maintenance-platform",
        title: "Predictive Maintenance Platform",
        client: Some("Industrial Co"),
        category: "AI/ML",
        result: "$2M saved annually",
        description: "IoT sensor data analysis for predictive equipment maintenance.",
        tags: &[],
        body: &[
            Block::Paragraph(
                "Unplanned downtime is the enemy of manufacturing efficiency. Industrial Co faced millions in losses annually due to critical machinery failures. \
                 We developed a predictive maintenance platform that listens to the machines.",
            ),
            Block::Heading("IoT Data Ingestion"),
            Block::Paragraph(
                "We aggregated high-frequency vibration and temperature data from thousands of sensors across the factory floor into a centralized data lake.",
            ),
            Block::Heading("Anomaly Detection"),
            Block::Paragraph(
                "Using unsupervised learning techniques (Isolation Forests), our model detects subtle deviations in equipment behavior weeks before a failure occurs.",
            ),
            Block::Heading("Impact"),
            Block::Paragraph(
                "The system now alerts maintenance teams to potential issues with 95% accuracy, virtually eliminating unplanned downtime \
                 and saving over $2M annually in lost production and repairs.",
            ),
        ],
    },
    Project {
        slug: "ecommerce-recommendation-engine",
        title: "E-Commerce Recommendation Engine",
        client: Some("RetailMax"),
        category: "Data Science",
        result: "35% increase in sales",
        description: "Personalized product recommendations using collaborative filtering.",
        tags: &[],
        body: &[
            Block::Paragraph(
                "In e-commerce, personalization is king. RetailMax needed to move beyond generic \"bestsellers\" lists to truly individualized shopping experiences.",
            ),
            Block::Heading("Hybrid Filtering Approach"),
            Block::Paragraph(
                "We implemented a hybrid recommendation engine combining collaborative filtering (users like you bought...) \
                 and content-based filtering (items similar to this...).",
            ),
            Block::Heading("Real-time Personalization"),
            Block::Paragraph(
                "The engine updates user profiles in real-time as they browse, adjusting recommendations instantly to reflect their current intent and session context.",
            ),
            Block::Heading("Results"),
            Block::Paragraph(
                "A/B testing showed a 35% increase in cross-sell revenue and a 20% uplift in average order value (AOV).",
            ),
        ],
    },
    Project {
        slug: "healthcare-analytics-dashboard",
        title: "Healthcare Analytics Dashboard",
        client: Some("MediCare Plus"),
        category: "Web Development",
        result: "60% faster insights",
        description: "Real-time analytics platform for patient outcome tracking.",
        tags: &[],
        body: &[
            Block::Paragraph(
                "Healthcare providers are drowning in data but starving for insights. MediCare Plus needed a way to visualize patient outcomes \
                 and operational efficiency in real-time.",
            ),
            Block::Heading("Data Integration"),
            Block::Paragraph(
                "We built a secure, HIPAA-compliant pipeline integrating Electronic Health Records (EHR) with operational data sources.",
            ),
            Block::Heading("Interactive Visualization"),
            Block::Paragraph(
                "Using D3.js and React, we created an interactive dashboard allowing administrators to drill down from hospital-wide metrics \
                 to individual ward performance.",
            ),
            Block::Heading("Impact"),
            Block::Paragraph(
                "Decision-makers now access critical insights 60% faster, leading to improved resource allocation and better patient care outcomes.",
            ),
        ],
    },
    Project {
        slug: "fintech-mobile-app",
        title: "Fintech Mobile App",
        client: Some("PayStream"),
        category: "Mobile",
        result: "500K+ downloads",
        description: "Cross-platform mobile banking application with biometric security.",
        tags: &[],
        body: &[
            Block::Paragraph(
                "PayStream wanted to disrupt the neobank market with a mobile-first experience that was secure yet frictionless.",
            ),
            Block::Heading("Security First"),
            Block::Paragraph(
                "We implemented multi-factor authentication and biometric login (FaceID/TouchID) to ensure banking-grade security \
                 without compromising user experience.",
            ),
            Block::Heading("Flutter Development"),
            Block::Paragraph(
                "Using Flutter, we delivered a high-performance native experience across both iOS and Android from a single codebase, \
                 accelerating time-to-market.",
            ),
            Block::Heading("Growth"),
            Block::Paragraph(
                "The app reached 500,000 downloads in its first year, maintaining a 4.8-star rating due to its intuitive design and reliability.",
            ),
        ],
    },
    Project {
        slug: "supply-chain-automation",
        title: "Supply Chain Automation",
        client: Some("GlobalTrade"),
        category: "Automation",
        result: "75% process automation",
        description: "End-to-end supply chain digitization with AI-driven insights.",
        tags: &[],
        body: &[
            Block::Paragraph(
                "GlobalTrade's supply chain was bogged down by manual paperwork and opaque processes. We digitized and automated their end-to-end workflow.",
            ),
            Block::Heading("Intelligent Document Processing (IDP)"),
            Block::Paragraph(
                "We deployed AI models to automatically extract data from invoices, bills of lading, and customs forms, \
                 reducing manual entry errors by 99%.",
            ),
            Block::Heading("Process Automation"),
            Block::Paragraph(
                "Robotic Process Automation (RPA) bots now handle routine tasks like order confirmation and inventory updates across disparate ERP systems.",
            ),
            Block::Heading("Results"),
            Block::Paragraph(
                "The initiative achieved 75% process automation, freeing up human staff to focus on strategic vendor relationships and exception handling.",
            ),
        ],
    },
    Project {
        slug: "customer-service-chatbot",
        title: "Customer Service Chatbot",
        client: Some("ServiceFirst"),
        category: "NLP",
        result: "80% query resolution",
        description: "Intelligent chatbot handling customer inquiries 24/7.",
        tags: &[],
        body: &[
            Block::Paragraph(
                "ServiceFirst needed to scale their support operations without linearly scaling headcount. The solution was an intelligent, conversational AI.",
            ),
            Block::Heading("Natural Language Understanding (NLU)"),
            Block::Paragraph(
                "Unlike rigid rule-based bots, our solution uses advanced NLU to understand customer intent, sentiment, and context, \
                 providing human-like responses.",
            ),
            Block::Heading("Seamless Handoff"),
            Block::Paragraph(
                "When the bot encounters a complex issue or an irate customer, it seamlessly escalates the chat to a human agent, \
                 providing them with a full summary of the interaction.",
            ),
            Block::Heading("Efficiency"),
            Block::Paragraph(
                "The chatbot now resolves 80% of routine queries autonomously, drastically reducing wait times and operational costs.",
            ),
        ],
    },
];
