use chrono::{Duration, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    AddressDetails, CreateBoletoSubscription, CreatePayPalSubscription, DocumentType, Handler,
    InMemoryEmailService, InMemoryStudentRepository, Money, PaymentDetails, StudentDetails,
    SubscriptionHandler,
};

fn boleto_command(document: String, email: String) -> CreateBoletoSubscription {
    let now = Utc::now();
    CreateBoletoSubscription {
        student: StudentDetails {
            first_name: "Bruce".to_string(),
            last_name: "Wayne".to_string(),
            document,
            email,
        },
        address: AddressDetails {
            street: "Fortaleza".to_string(),
            number: "166".to_string(),
            neighborhood: "New City".to_string(),
            city: "SBO".to_string(),
            state: "SP".to_string(),
            country: "Brazil".to_string(),
            zip_code: "13454424".to_string(),
        },
        payment: PaymentDetails {
            paid_date: now,
            expire_date: now + Duration::days(5),
            total: Money::from_units(60),
            total_paid: Money::from_units(60),
            payer: "WAYNE CORP".to_string(),
            payer_document: "12345679811".to_string(),
            payer_document_type: DocumentType::Cpf,
        },
        bar_code: "123456789".to_string(),
        boleto_number: "1234567890".to_string(),
    }
}

fn bench_accepted_boleto(c: &mut Criterion) {
    let handler =
        SubscriptionHandler::new(InMemoryStudentRepository::new(), InMemoryEmailService::new());
    let mut n: u64 = 0;

    c.bench_function("domain/boleto_accepted", |b| {
        b.iter(|| {
            n += 1;
            let cmd = boleto_command(format!("{n:011}"), format!("student{n}@example.com"));
            let result = handler.handle(cmd).unwrap();
            assert!(result.success);
        });
    });
}

fn bench_rejected_paypal(c: &mut Criterion) {
    let handler = SubscriptionHandler::new(
        InMemoryStudentRepository::new()
            .with_document("11111111111")
            .with_email("bruce@wayne.com"),
        InMemoryEmailService::new(),
    );

    c.bench_function("domain/paypal_rejected_all_rules", |b| {
        b.iter(|| {
            let base = boleto_command("11111111111".to_string(), "bruce@wayne.com".to_string());
            let mut cmd = CreatePayPalSubscription {
                student: base.student,
                address: base.address,
                payment: base.payment,
                transaction_code: "TX".to_string(),
            };
            cmd.student.first_name = "B".to_string();
            cmd.payment.total_paid = Money::from_cents(-1);
            let result = handler.handle(cmd).unwrap();
            assert!(!result.success);
        });
    });
}

fn bench_precheck_rejection(c: &mut Criterion) {
    let handler =
        SubscriptionHandler::new(InMemoryStudentRepository::new(), InMemoryEmailService::new());

    c.bench_function("domain/boleto_precheck_rejected", |b| {
        b.iter(|| {
            let mut cmd = boleto_command("11111111111".to_string(), "bruce@wayne.com".to_string());
            cmd.bar_code = String::new();
            let result = handler.handle(cmd).unwrap();
            assert!(!result.success);
        });
    });
}

criterion_group!(
    benches,
    bench_accepted_boleto,
    bench_rejected_paypal,
    bench_precheck_rejection,
);
criterion_main!(benches);
