//! Clause text
//!
//! One function per block of the contract. Each takes the contract facts and
//! returns the block body as plain text, paragraphs separated by a blank
//! line. Option-dependent wording is chosen by exhaustive matches so that a
//! new option value cannot be added without deciding its text.
//!
//! Every interpolated amount goes through [`Money::format_es`], every date
//! through [`format_long_date`], and every free-text value through
//! [`or_placeholder`].

use core_kernel::{
    format_long_date, format_money, or_placeholder, Money, MoneyError, TEXT_PLACEHOLDER,
};

use crate::contract::ContractData;
use crate::derived::{ClauseKind, NumberedClause};
use crate::expenses::ExpensePayer;
use crate::financial::{GuaranteeType, PaymentMethod};
use crate::options::{PetPolicy, RentUpdatePolicy};
use crate::party::{Party, PartyRole};

/// Title of the lease as it heads the document
pub const DOCUMENT_TITLE: &str = "CONTRATO DE ARRENDAMIENTO DE VIVIENDA";

fn paragraphs(parts: &[String]) -> String {
    parts.join("\n\n")
}

fn euros(amount: Money) -> String {
    format!("{} EUROS", amount.format_es())
}

fn euros_or_placeholder(amount: Result<Money, MoneyError>) -> String {
    match amount {
        Ok(amount) => euros(amount),
        Err(_) => format!("{} EUROS", TEXT_PLACEHOLDER),
    }
}

/// Body of a numbered clause
pub fn clause_body(clause: &NumberedClause, data: &ContractData) -> String {
    match clause.kind() {
        ClauseKind::ObjectAndPurpose => object_and_purpose(data),
        ClauseKind::DurationAndRenewal => duration_and_renewal(data),
        ClauseKind::RentAndPayment => rent_and_payment(data),
        ClauseKind::RentUpdate => rent_update(data),
        ClauseKind::DepositAndGuarantees => deposit_and_guarantees(data),
        ClauseKind::Expenses => expenses(clause.number, data),
        ClauseKind::PropertyState => property_state(data),
        ClauseKind::HouseRulesAndPets => house_rules_and_pets(data),
        ClauseKind::WaiverOfPreferentialRights => waiver_of_preferential_rights(),
        ClauseKind::Guarantor => guarantor(data),
        ClauseKind::Jurisdiction => jurisdiction(),
    }
}

// ============================================================================
// Recitals and exposition
// ============================================================================

fn identification(party: &Party) -> String {
    let domicile = match party.role {
        PartyRole::Landlord => format!(
            "y domicilio a efectos de notificaciones en {}",
            or_placeholder(&party.address)
        ),
        PartyRole::Tenant => {
            "y domicilio a efectos de notificaciones en la vivienda objeto de arrendamiento"
                .to_string()
        }
        PartyRole::Guarantor => format!("y domicilio en {}", or_placeholder(&party.address)),
    };

    format!(
        "D./Dña. {}, mayor de edad, de nacionalidad {}, con DNI/NIE {}, {}.",
        or_placeholder(&party.full_name),
        or_placeholder(&party.nationality),
        or_placeholder(&party.doc_number),
        domicile
    )
}

fn role_heading(role: PartyRole) -> String {
    let lead = match role {
        PartyRole::Landlord => "DE UNA PARTE",
        PartyRole::Tenant => "DE OTRA PARTE",
        PartyRole::Guarantor => "Y DE OTRA PARTE",
    };
    format!("{} (la \"{}\"):", lead, role.collective_name())
}

fn role_section(data: &ContractData, role: PartyRole) -> Option<String> {
    let parties: Vec<&Party> = data.parties_with_role(role).collect();

    let entries: Vec<String> = match (role, parties.is_empty()) {
        (PartyRole::Guarantor, true) => return None,
        (_, true) => vec![identification(&Party {
            nationality: String::new(),
            ..Party::new(role)
        })],
        (_, false) => parties.into_iter().map(identification).collect(),
    };

    Some(format!("{}\n{}", role_heading(role), entries.join("\n")))
}

/// Place and date of signing plus the identification of every party
pub fn recitals(data: &ContractData) -> String {
    let mut parts = vec![format!(
        "En {}, a {}.",
        or_placeholder(&data.property.location),
        format_long_date(data.property.date)
    )];

    parts.extend(
        PartyRole::ALL
            .into_iter()
            .filter_map(|role| role_section(data, role)),
    );

    parts.push(format!(
        "Las partes se reconocen mutua y recíprocamente la capacidad legal necesaria para \
         otorgar el presente {}, y a tal efecto,",
        DOCUMENT_TITLE
    ));

    paragraphs(&parts)
}

/// Description of the property and the purpose of the lease
pub fn exposition(data: &ContractData) -> String {
    let property = &data.property;

    let mut first = format!(
        "I. Que la Parte Arrendadora es propietaria en pleno dominio de la vivienda sita en {}. \
         Referencia Catastral: {}. La vivienda cuenta con Cédula de Habitabilidad nº {} y \
         Certificado de Eficiencia Energética {}.",
        or_placeholder(&property.address),
        or_placeholder(&property.catastral_ref),
        or_placeholder(&property.habitability_cert),
        or_placeholder(&property.energy_cert),
    );
    if !property.description.trim().is_empty() {
        first.push_str(&format!(
            " Se incluye en el arrendamiento: {}.",
            property.description.trim()
        ));
    }
    if !property.community.trim().is_empty() {
        first.push_str(&format!(
            " Comunidad de propietarios: {}.",
            property.community.trim()
        ));
    }
    first.push_str(" (En adelante, el \"Inmueble\").");

    paragraphs(&[
        first,
        "II. Que la Parte Arrendataria está interesada en el arrendamiento del Inmueble para \
         destinarlo a su vivienda habitual y permanente."
            .to_string(),
        "III. Que estando interesadas ambas partes, acuerdan suscribir el presente Contrato con \
         sujeción a las siguientes CLÁUSULAS."
            .to_string(),
    ])
}

// ============================================================================
// Numbered clauses
// ============================================================================

fn object_and_purpose(data: &ContractData) -> String {
    paragraphs(&[
        "La Parte Arrendadora cede en arrendamiento a la Parte Arrendataria el uso del Inmueble \
         descrito en el Expositivo I. El Inmueble se destinará exclusivamente a vivienda \
         permanente de la Parte Arrendataria y su familia, sin que pueda destinarse a otro uso, \
         ni a actividad comercial, industrial o profesional alguna."
            .to_string(),
        format!(
            "Queda expresamente prohibido el subarrendamiento total o parcial de la vivienda, así \
             como la cesión del contrato, sin el consentimiento previo y por escrito de la Parte \
             Arrendadora. El incumplimiento de esta prohibición dará lugar a la resolución del \
             contrato. La ocupación máxima permitida es de {} personas.",
            data.property.max_occupancy
        ),
    ])
}

fn duration_and_renewal(data: &ContractData) -> String {
    paragraphs(&[
        format!(
            "El plazo de duración del presente contrato es de UN (1) AÑO, a contar desde el día {}.",
            format_long_date(data.property.date)
        ),
        "Llegado el vencimiento del contrato, este se prorrogará obligatoriamente por plazos \
         anuales hasta que el arrendamiento alcance una duración mínima de cinco (5) años (o siete \
         años si el arrendador fuese persona jurídica), salvo que la Parte Arrendataria manifieste \
         a la Parte Arrendadora, con treinta días de antelación como mínimo a la fecha de \
         terminación del contrato o de cualquiera de las prórrogas, su voluntad de no renovarlo."
            .to_string(),
        "Desistimiento: La Parte Arrendataria podrá desistir del contrato de arrendamiento, una vez \
         que hayan transcurrido al menos seis meses, siempre que se lo comunique a la Parte \
         Arrendadora con una antelación mínima de treinta días."
            .to_string(),
    ])
}

fn rent_and_payment(data: &ContractData) -> String {
    let financials = &data.financials;

    let payment = match financials.payment_method {
        PaymentMethod::Transfer => {
            let holder = if financials.bank_account_holder.trim().is_empty() {
                "la Parte Arrendadora"
            } else {
                financials.bank_account_holder.trim()
            };
            format!(
                "El ingreso se realizará mediante transferencia bancaria a la cuenta IBAN {} de la \
                 que es titular {}, en la entidad {}.",
                or_placeholder(&financials.bank_account),
                holder,
                or_placeholder(&financials.bank_entity)
            )
        }
        PaymentMethod::DirectDebit => format!(
            "El pago se realizará mediante domiciliación bancaria en la cuenta facilitada por la \
             Parte Arrendataria: {} (Entidad: {}).",
            or_placeholder(&financials.bank_account),
            or_placeholder(&financials.bank_entity)
        ),
    };

    paragraphs(&[
        format!(
            "La renta anual se fija en {}, pagadera en mensualidades anticipadas de {}.",
            euros_or_placeholder(financials.annual_rent()),
            euros(financials.monthly_rent)
        ),
        format!(
            "El pago se efectuará dentro de los 7 primeros días de cada mes. {}",
            payment
        ),
        "El impago de una sola mensualidad dará derecho a la Parte Arrendadora a instar el \
         desahucio y la resolución del contrato."
            .to_string(),
    ])
}

fn rent_update(data: &ContractData) -> String {
    match data.options.rent_update {
        RentUpdatePolicy::NoUpdate => {
            "La renta no se actualizará durante la vigencia del contrato.".to_string()
        }
        RentUpdatePolicy::IndexUpdate => {
            "La renta se actualizará anualmente, en la fecha en que se cumpla cada año de vigencia \
             de contrato, aplicando a la renta correspondiente a la anualidad anterior la variación \
             porcentual experimentada por el Índice General Nacional del Sistema de Índices de \
             Precios de Consumo (IPC) o el índice que lo sustituya (ej. I.R.A.V si procede \
             legalmente)."
                .to_string()
        }
        RentUpdatePolicy::IndexUpdateFloor => {
            "La renta se actualizará anualmente según IPC, sin que en ningún caso pueda resultar \
             una renta inferior a la del año anterior (actualización solo al alza)."
                .to_string()
        }
    }
}

fn deposit_and_guarantees(data: &ContractData) -> String {
    let financials = &data.financials;
    let months = match financials.deposit_months {
        1 => "1 mensualidad".to_string(),
        n => format!("{} mensualidades", n),
    };

    let mut parts = vec![format!(
        "A la firma del presente contrato, la Parte Arrendataria entrega a la Parte Arrendadora el \
         importe de {}, equivalente a {} de renta, en concepto de FIANZA LEGAL. El saldo de la \
         fianza será devuelto a la finalización del contrato, previa comprobación del estado de la \
         vivienda y del cumplimiento de las obligaciones contractuales.",
        euros(financials.deposit_amount),
        months
    )];

    let delivery = match financials.guarantee_type {
        GuaranteeType::None => None,
        GuaranteeType::Cash => Some("en efectivo metálico"),
        GuaranteeType::Transfer => Some("mediante transferencia"),
        GuaranteeType::BankGuarantee => Some("mediante Aval Bancario"),
    };

    if let Some(delivery) = delivery {
        parts.push(format!(
            "Adicionalmente, se entrega en concepto de GARANTÍA ADICIONAL la cantidad de {} ({}). \
             Esta garantía responde del cumplimiento de todas las obligaciones del arrendatario.",
            euros(financials.guarantee_amount),
            delivery
        ));
    }

    paragraphs(&parts)
}

fn expenses(number: usize, data: &ContractData) -> String {
    let expenses = &data.expenses;

    let community = match expenses.community_fees_payer {
        ExpensePayer::Landlord => "la Parte Arrendadora.".to_string(),
        ExpensePayer::Tenant => format!(
            "la Parte Arrendataria. Se hace constar que el importe mensual actual asciende a {} €, \
             revisable anualmente.",
            format_money(expenses.community_fees_amount)
        ),
    };

    let ibi = match expenses.ibi_payer {
        ExpensePayer::Landlord => "la Parte Arrendadora.".to_string(),
        ExpensePayer::Tenant => format!(
            "la Parte Arrendataria. El importe anual actual es de {} €, pagadero por prorrateo \
             mensual o a la presentación del recibo.",
            format_money(expenses.ibi_amount)
        ),
    };

    let garbage = match expenses.garbage_tax_payer {
        ExpensePayer::Landlord => "la Parte Arrendadora.",
        ExpensePayer::Tenant => "la Parte Arrendataria.",
    };

    paragraphs(&[
        format!(
            "{}.1. Suministros: Los gastos por servicios con que cuente el Inmueble que se \
             individualicen mediante aparatos contadores (luz, agua, gas, teléfono, internet, etc.) \
             serán de cuenta exclusiva de la Parte Arrendataria.",
            number
        ),
        format!(
            "{}.2. Gastos Generales:\n- Gastos de Comunidad: Serán abonados por {}\n- Impuesto de \
             Bienes Inmuebles (IBI): Será abonado por {}\n- Tasa de Basuras: Será de cuenta de {}",
            number, community, ibi, garbage
        ),
    ])
}

fn property_state(data: &ContractData) -> String {
    let inventory = if data.options.has_inventory {
        " en el Inventario adjunto (Anexo I),"
    } else {
        ""
    };

    let furniture = if data.options.furniture.is_furnished() {
        "Vivienda amueblada."
    } else {
        "Vivienda sin amueblar."
    };

    paragraphs(&[
        format!(
            "La Parte Arrendataria declara recibir el Inmueble en perfecto estado de conservación y \
             habitabilidad, así como los muebles y electrodomésticos descritos{} obligándose a \
             devolverlos en el mismo estado al término del contrato, salvo el deterioro normal por \
             el uso.",
            inventory
        ),
        "Obras: Queda prohibida la realización de obras modificativas de la configuración de la \
         vivienda sin autorización escrita de la Propiedad."
            .to_string(),
        "Reparaciones: Serán de cuenta de la Parte Arrendadora las reparaciones necesarias para \
         conservar la vivienda en condiciones de habitabilidad, salvo cuando el deterioro sea \
         imputable a la Parte Arrendataria. Serán cargo de la Parte Arrendataria las pequeñas \
         reparaciones que exija el desgaste por el uso ordinario de la vivienda."
            .to_string(),
        format!(
            "Se entregan en este acto {} juegos de llaves. La pérdida de las llaves y el cambio de \
             cerradura correrá a cargo de la Parte Arrendataria.",
            data.property.keys_count
        ),
        format!("Mobiliario: {}", furniture),
    ])
}

fn house_rules_and_pets(data: &ContractData) -> String {
    let pets = match data.options.pets {
        PetPolicy::Forbidden => {
            "Queda terminantemente PROHIBIDA la tenencia de animales de cualquier especie en el \
             inmueble."
        }
        PetPolicy::Allowed => {
            "Se AUTORIZA la tenencia de animales domésticos, siendo la Parte Arrendataria \
             responsable de los daños que pudieran ocasionar."
        }
    };

    paragraphs(&[
        "La Parte Arrendataria se compromete a cumplir los estatutos y normas de la Comunidad de \
         Propietarios, respetando el descanso de los vecinos."
            .to_string(),
        format!("Respecto a la tenencia de animales en la vivienda: {}", pets),
    ])
}

fn waiver_of_preferential_rights() -> String {
    "La Parte Arrendataria renuncia expresamente a los derechos de tanteo y retracto sobre la \
     vivienda arrendada en caso de venta de la misma, de conformidad con el artículo 25.8 de la LAU."
        .to_string()
}

fn guarantor(data: &ContractData) -> String {
    let names: Vec<&str> = data
        .parties_with_role(PartyRole::Guarantor)
        .map(|p| or_placeholder(&p.full_name))
        .collect();
    let names = if names.is_empty() {
        TEXT_PLACEHOLDER.to_string()
    } else {
        names.join(", ")
    };

    format!(
        "La Parte Avalista, D./Dña. {}, se constituye en fiador solidario de todas las obligaciones \
         asumidas por la Parte Arrendataria en este contrato, renunciando expresamente a los \
         beneficios de orden, excusión y división, extendiendo su aval a la duración del contrato y \
         sus prórrogas.",
        names
    )
}

fn jurisdiction() -> String {
    "Para la resolución de cualquier conflicto que pudiera derivarse de la interpretación o \
     cumplimiento del presente contrato, las partes se someten a los Juzgados y Tribunales de la \
     ciudad donde radica la finca, renunciando a cualquier otro fuero que pudiera corresponderles."
        .to_string()
}

// ============================================================================
// Closing
// ============================================================================

/// Roles that sign, left to right: landlord, guarantor (if any), tenant
pub fn signature_roles(data: &ContractData) -> Vec<PartyRole> {
    let mut roles = vec![PartyRole::Landlord];
    if data.has_guarantors() {
        roles.push(PartyRole::Guarantor);
    }
    roles.push(PartyRole::Tenant);
    roles
}

/// Conformity statement and one signature line per signing role
pub fn closing(data: &ContractData) -> String {
    let mut parts = vec![
        "Y en prueba de conformidad, las partes firman el presente documento por duplicado \
         ejemplar y a un solo efecto, en el lugar y fecha indicados en el encabezamiento."
            .to_string(),
    ];

    parts.extend(signature_roles(data).into_iter().map(|role| {
        format!(
            "____________________\nLA {}\n(Firma)",
            role.collective_name().to_uppercase()
        )
    }));

    paragraphs(&parts)
}
